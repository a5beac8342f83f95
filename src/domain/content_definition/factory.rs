// src/domain/content_definition/factory.rs
use crate::domain::content_definition::entity::{
    ContentDefinition, NAME_FIELD, PropertyDefinition, property_not_found,
};
use crate::domain::content_definition::value_objects::{
    ContentDefinitionId, DefinitionName, FieldName, PropertyDefinitionId, PropertyType,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{RuleName, ValidatorConfig};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Partial update of a property definition. Validator entries only
/// reconfigure rules the property already carries.
#[derive(Debug, Clone, Default)]
pub struct PropertyDefinitionPatch {
    pub description: Option<String>,
    pub localized: Option<bool>,
    pub validators: Map<String, Value>,
}

/// Stateless operations that create and edit content definitions.
pub struct ContentDefinitionFactory;

impl ContentDefinitionFactory {
    pub fn new_content_definition(
        id: ContentDefinitionId,
        name_property_id: PropertyDefinitionId,
        name: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<ContentDefinition> {
        let name = DefinitionName::new(name)?;
        let field = FieldName::new(NAME_FIELD)?;

        let mut name_property =
            PropertyDefinition::new(name_property_id, field.clone(), PropertyType::Text, "", true);
        name_property.upsert_validator(ValidatorConfig::Required(true))?;

        Ok(ContentDefinition {
            id,
            name,
            description: description.to_owned(),
            property_definitions: BTreeMap::from([(field, name_property)]),
            revision: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn new_property_definition(
        definition: &mut ContentDefinition,
        id: PropertyDefinitionId,
        name: &str,
        property_type: &str,
        description: &str,
        localized: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<PropertyDefinitionId> {
        let name = FieldName::new(name)?;
        if definition.property_definitions.contains_key(&name) {
            return Err(DomainError::DuplicateName(name.into()));
        }
        let property_type: PropertyType = property_type.parse()?;

        let property = PropertyDefinition::new(id, name.clone(), property_type, description, localized);
        definition.property_definitions.insert(name, property);
        definition.touch(now);
        Ok(id)
    }

    pub fn rename_property_definition(
        definition: &mut ContentDefinition,
        property_id: PropertyDefinitionId,
        new_name: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let property = definition.property_by_id_mut(property_id)?;
        if property.is_canonical_name() {
            return Err(DomainError::Validation(format!(
                "the '{NAME_FIELD}' property cannot be renamed"
            )));
        }

        let current = property.name.clone();
        let new_name = FieldName::new(new_name)?;
        if new_name == current {
            return Ok(());
        }
        if definition.property_definitions.contains_key(&new_name) {
            return Err(DomainError::DuplicateName(new_name.into()));
        }

        let mut property = definition
            .property_definitions
            .remove(&current)
            .ok_or_else(|| property_not_found(property_id))?;
        property.name = new_name.clone();
        definition.property_definitions.insert(new_name, property);
        definition.touch(now);
        Ok(())
    }

    pub fn update_property_definition(
        definition: &mut ContentDefinition,
        property_id: PropertyDefinitionId,
        patch: PropertyDefinitionPatch,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let property = definition.property_by_id_mut(property_id)?;

        let mut configs = Vec::with_capacity(patch.validators.len());
        for (rule, raw) in &patch.validators {
            let rule: RuleName = rule
                .parse()
                .map_err(|_| DomainError::UnknownValidator(rule.clone()))?;
            if !property.validators.contains(rule) {
                return Err(DomainError::UnknownValidator(rule.to_string()));
            }
            configs.push(ValidatorConfig::parse_rule(rule, raw)?);
        }

        if let Some(description) = patch.description {
            property.description = description;
        }
        if let Some(localized) = patch.localized {
            property.localized = localized;
        }
        for config in configs {
            property.validators.insert(config);
        }
        definition.touch(now);
        Ok(())
    }

    pub fn delete_property_definition(
        definition: &mut ContentDefinition,
        property_id: PropertyDefinitionId,
        now: DateTime<Utc>,
    ) -> DomainResult<PropertyDefinition> {
        let property = definition.property_by_id_mut(property_id)?;
        if property.is_canonical_name() {
            return Err(DomainError::Validation(format!(
                "the '{NAME_FIELD}' property cannot be deleted"
            )));
        }
        let name = property.name.clone();
        let removed = definition
            .property_definitions
            .remove(&name)
            .ok_or_else(|| property_not_found(property_id))?;
        definition.touch(now);
        Ok(removed)
    }

    pub fn upsert_validator(
        definition: &mut ContentDefinition,
        property_id: PropertyDefinitionId,
        rule: &str,
        raw: &Value,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let config = ValidatorConfig::parse(rule, raw)?;
        definition.property_by_id_mut(property_id)?.upsert_validator(config)?;
        definition.touch(now);
        Ok(())
    }
}
