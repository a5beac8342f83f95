// src/domain/content/factory.rs
use crate::domain::content::entity::{
    Content, ContentField, ContentFields, ContentVersion, FieldValue,
};
use crate::domain::content::value_objects::{ContentId, Locale, PublishStatus, VersionNumber};
use crate::domain::content_definition::{
    ContentDefinition, FieldName, PropertyDefinitionId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::workspace::WorkspaceId;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Stateless operations that create content and shape its versions.
pub struct ContentFactory;

impl ContentFactory {
    pub fn new_content(
        id: ContentId,
        definition: &ContentDefinition,
        workspace_id: WorkspaceId,
        default_locale: &Locale,
        parent_id: Option<ContentId>,
        now: DateTime<Utc>,
    ) -> DomainResult<Content> {
        let mut version = ContentVersion::draft(VersionNumber::FIRST, now);
        Self::add_language(&mut version, default_locale.clone(), true, definition)?;

        Ok(Content {
            id,
            content_definition_id: definition.id,
            workspace_id,
            parent_id,
            published_version: None,
            status: PublishStatus::Draft,
            versions: BTreeMap::from([(VersionNumber::FIRST, version)]),
            revision: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Adds `locale` to a draft version. Non-localized fields mirror the
    /// value the version already holds; localized fields are only created
    /// (empty) when `include_localized` is set.
    pub fn add_language(
        version: &mut ContentVersion,
        locale: Locale,
        include_localized: bool,
        definition: &ContentDefinition,
    ) -> DomainResult<()> {
        version.ensure_draft()?;
        if version.has_locale(&locale) {
            return Err(DomainError::DuplicateLanguage(locale.into()));
        }

        // Properties added to the schema after this draft was created are
        // backfilled into the locales it already holds.
        for property in definition.properties().filter(|property| !property.localized) {
            let value = mirrored_value(version, property.id);
            for fields in version.properties.values_mut() {
                if !fields.values().any(|field| field.id == property.id) {
                    fields.insert(
                        property.name.clone(),
                        ContentField::from_definition(property, value.clone()),
                    );
                }
            }
        }

        let mut fields = ContentFields::new();
        for property in definition.properties() {
            if property.localized {
                if include_localized {
                    fields.insert(property.name.clone(), ContentField::empty(property));
                }
            } else {
                let value = mirrored_value(version, property.id);
                fields.insert(
                    property.name.clone(),
                    ContentField::from_definition(property, value),
                );
            }
        }

        version.properties.insert(locale, fields);
        Ok(())
    }

    /// Writes one field of a draft version. No type checks happen here;
    /// values are validated when the version is published.
    pub fn set_field(
        version: &mut ContentVersion,
        locale: &str,
        field_name: &str,
        value: FieldValue,
    ) -> DomainResult<()> {
        version.ensure_draft()?;

        let locale = Locale::new(locale)?;
        if !version.has_locale(&locale) {
            return Err(DomainError::MissingLanguage(locale.into()));
        }
        let name = FieldName::new(field_name)
            .map_err(|_| DomainError::MissingField(field_name.to_owned()))?;

        // A field left out of this locale is instantiated from its
        // counterpart in another locale.
        let template = version
            .fields(&locale)
            .and_then(|fields| fields.get(&name))
            .or_else(|| {
                version
                    .properties
                    .values()
                    .find_map(|fields| fields.get(&name))
            })
            .cloned()
            .ok_or_else(|| DomainError::MissingField(name.to_string()))?;

        if template.localized {
            if let Some(fields) = version.properties.get_mut(&locale) {
                fields.insert(name, ContentField { value, ..template });
            }
        } else {
            for fields in version.properties.values_mut() {
                fields.insert(
                    name.clone(),
                    ContentField {
                        value: value.clone(),
                        ..template.clone()
                    },
                );
            }
        }
        Ok(())
    }

    /// Derives a new draft from `base` under the (possibly edited)
    /// `definition`. Values follow their property id, so renamed fields keep
    /// their content and fields whose property was removed are dropped.
    pub fn new_content_version(
        content: &Content,
        definition: &ContentDefinition,
        base: VersionNumber,
        default_locale: &Locale,
        now: DateTime<Utc>,
    ) -> DomainResult<ContentVersion> {
        let base = content.version(base)?;
        let mut version = ContentVersion::draft(content.next_version_number()?, now);

        for locale in base.locales() {
            Self::add_language(
                &mut version,
                locale.clone(),
                locale == default_locale,
                definition,
            )?;
        }

        for (locale, old_fields) in &base.properties {
            if let Some(new_fields) = version.properties.get_mut(locale) {
                carry_over(old_fields, new_fields, definition);
            }
        }

        mirror_non_localized(&mut version, definition, default_locale);
        Ok(version)
    }
}

fn mirrored_value(version: &ContentVersion, id: PropertyDefinitionId) -> FieldValue {
    version
        .properties
        .values()
        .find_map(|fields| fields.values().find(|field| field.id == id))
        .map_or(FieldValue::Null, |field| field.value.clone())
}

fn carry_over(old_fields: &ContentFields, new_fields: &mut ContentFields, definition: &ContentDefinition) {
    let mut resolved = HashSet::new();
    let mut old_by_id = HashMap::new();

    for (name, old) in old_fields {
        match new_fields.get_mut(name) {
            Some(field) if field.id == old.id => {
                field.value = old.value.clone();
                resolved.insert(old.id);
            }
            _ => {
                old_by_id.insert(old.id, old);
            }
        }
    }

    for property in definition.properties() {
        if resolved.contains(&property.id) {
            continue;
        }
        if let Some(old) = old_by_id.get(&property.id) {
            new_fields.insert(
                property.name.clone(),
                ContentField::from_definition(property, old.value.clone()),
            );
        }
    }
}

fn mirror_non_localized(
    version: &mut ContentVersion,
    definition: &ContentDefinition,
    default_locale: &Locale,
) {
    for property in definition.properties().filter(|property| !property.localized) {
        let source = version
            .fields(default_locale)
            .and_then(|fields| fields.get(&property.name))
            .or_else(|| {
                version
                    .properties
                    .values()
                    .find_map(|fields| fields.get(&property.name))
            })
            .map(|field| field.value.clone());

        let Some(value) = source else {
            continue;
        };
        for fields in version.properties.values_mut() {
            fields.insert(
                property.name.clone(),
                ContentField::from_definition(property, value.clone()),
            );
        }
    }
}
