// tests/support/builders.rs
use super::mocks::fixed_now;
use content_core::domain::content::{Content, ContentFactory, ContentId, Locale};
use content_core::domain::content_definition::{
    ContentDefinition, ContentDefinitionFactory, ContentDefinitionId, PropertyDefinitionId,
};
use content_core::domain::workspace::WorkspaceId;
use serde_json::Value;
use uuid::Uuid;

struct PropertySpec {
    id: PropertyDefinitionId,
    name: String,
    property_type: &'static str,
    localized: bool,
    validators: Vec<(&'static str, Value)>,
}

/// ドメイン層のテスト用にコンテンツ定義を組み立てるビルダー
pub struct ContentDefinitionBuilder {
    name: String,
    properties: Vec<PropertySpec>,
}

impl ContentDefinitionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn text(self, name: &str, localized: bool) -> Self {
        self.property(name, "text", localized)
    }

    pub fn number(self, name: &str, localized: bool) -> Self {
        self.property(name, "number", localized)
    }

    fn property(mut self, name: &str, property_type: &'static str, localized: bool) -> Self {
        self.properties.push(PropertySpec {
            id: PropertyDefinitionId::new(Uuid::new_v4()),
            name: name.to_string(),
            property_type,
            localized,
            validators: Vec::new(),
        });
        self
    }

    /// 直前に追加したプロパティにバリデータを設定する
    pub fn validator(mut self, rule: &'static str, config: Value) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.validators.push((rule, config));
        }
        self
    }

    pub fn build(self) -> ContentDefinition {
        let now = fixed_now();
        let mut definition = ContentDefinitionFactory::new_content_definition(
            ContentDefinitionId::new(Uuid::new_v4()),
            PropertyDefinitionId::new(Uuid::new_v4()),
            &self.name,
            "",
            now,
        )
        .unwrap();

        for spec in self.properties {
            ContentDefinitionFactory::new_property_definition(
                &mut definition,
                spec.id,
                &spec.name,
                spec.property_type,
                "",
                spec.localized,
                now,
            )
            .unwrap();
            for (rule, config) in spec.validators {
                ContentDefinitionFactory::upsert_validator(
                    &mut definition,
                    spec.id,
                    rule,
                    &config,
                    now,
                )
                .unwrap();
            }
        }
        definition
    }
}

/// 指定ロケールで下書き 0 を持つコンテンツを作る
pub fn draft_content(definition: &ContentDefinition, default_locale: &str) -> Content {
    ContentFactory::new_content(
        ContentId::new(Uuid::new_v4()),
        definition,
        WorkspaceId::new(Uuid::nil()),
        &Locale::new(default_locale).unwrap(),
        None,
        fixed_now(),
    )
    .unwrap()
}
