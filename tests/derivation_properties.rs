// tests/derivation_properties.rs
use content_core::domain::content::{ContentFactory, Locale, VersionNumber};
use content_core::domain::content_definition::ContentDefinitionFactory;
use proptest::collection::btree_map;
use proptest::prelude::*;
use serde_json::json;

mod support;
use support::{ContentDefinitionBuilder, draft_content, fixed_now};

const LOCALES: [&str; 2] = ["sv-SE", "en-US"];

/// プロパティ名 (接頭辞 `f_`) と各プロパティが localized かどうか、その値
fn schema_strategy() -> impl Strategy<Value = Vec<(String, bool, String)>> {
    btree_map("[a-z]{1,6}", (any::<bool>(), "[A-Za-z ]{0,12}"), 1..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, (localized, value))| (format!("f_{name}"), localized, value))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// 改名されたプロパティの値は、以前存在した全ロケールで新しい名前の下に残る
    #[test]
    fn renamed_fields_keep_their_values(schema in schema_strategy(), rename_mask in any::<u8>()) {
        let mut builder = ContentDefinitionBuilder::new("Doc");
        for (name, localized, _) in &schema {
            builder = builder.text(name, *localized);
        }
        let mut definition = builder.build();
        let default_locale = Locale::new(LOCALES[0]).unwrap();

        let mut content = draft_content(&definition, LOCALES[0]);
        let version = content.version_mut(VersionNumber::FIRST).unwrap();
        ContentFactory::add_language(
            version,
            Locale::new(LOCALES[1]).unwrap(),
            true,
            &definition,
        )
        .unwrap();
        for (name, localized, value) in &schema {
            for locale in LOCALES {
                if *localized || locale == LOCALES[0] {
                    ContentFactory::set_field(version, locale, name, json!(format!("{locale}:{value}")))
                        .unwrap();
                }
            }
        }
        let base = content.version(VersionNumber::FIRST).unwrap().clone();

        let mut renamed = Vec::new();
        for (index, (name, _, _)) in schema.iter().enumerate() {
            let id = definition.property(name).unwrap().id;
            let target = if rename_mask & (1 << index) != 0 {
                format!("r_{}", &name[2..])
            } else {
                name.clone()
            };
            if &target != name {
                ContentDefinitionFactory::rename_property_definition(
                    &mut definition, id, &target, fixed_now(),
                )
                .unwrap();
            }
            renamed.push((name.clone(), target));
        }

        let derived = ContentFactory::new_content_version(
            &content,
            &definition,
            VersionNumber::FIRST,
            &default_locale,
            fixed_now(),
        )
        .unwrap();

        for (old, new) in &renamed {
            for locale in base.locales() {
                let Some(before) = base.value(locale, old) else { continue };
                prop_assert_eq!(derived.value(locale, new), Some(before));
                if old != new {
                    prop_assert!(derived.value(locale, old).is_none());
                }
            }
        }
    }

    /// 削除されたプロパティは派生バージョンのどのロケールにも残らない
    #[test]
    fn deleted_fields_are_dropped_everywhere(schema in schema_strategy(), delete_mask in any::<u8>()) {
        let mut builder = ContentDefinitionBuilder::new("Doc");
        for (name, localized, _) in &schema {
            builder = builder.text(name, *localized);
        }
        let mut definition = builder.build();
        let default_locale = Locale::new(LOCALES[0]).unwrap();

        let mut content = draft_content(&definition, LOCALES[0]);
        let version = content.version_mut(VersionNumber::FIRST).unwrap();
        ContentFactory::add_language(
            version,
            Locale::new(LOCALES[1]).unwrap(),
            true,
            &definition,
        )
        .unwrap();
        for (name, _, value) in &schema {
            ContentFactory::set_field(version, LOCALES[0], name, json!(value)).unwrap();
        }

        let mut deleted = Vec::new();
        let mut kept = Vec::new();
        for (index, (name, _, _)) in schema.iter().enumerate() {
            if delete_mask & (1 << index) != 0 {
                let id = definition.property(name).unwrap().id;
                ContentDefinitionFactory::delete_property_definition(&mut definition, id, fixed_now())
                    .unwrap();
                deleted.push(name.clone());
            } else {
                kept.push(name.clone());
            }
        }

        let derived = ContentFactory::new_content_version(
            &content,
            &definition,
            VersionNumber::FIRST,
            &default_locale,
            fixed_now(),
        )
        .unwrap();

        for locale in derived.locales() {
            for name in &deleted {
                prop_assert!(derived.value(locale, name).is_none());
            }
        }
        for name in &kept {
            prop_assert!(derived.value(&default_locale, name).is_some());
        }
    }
}
