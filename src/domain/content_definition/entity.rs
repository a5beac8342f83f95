// src/domain/content_definition/entity.rs
use crate::domain::content_definition::value_objects::{
    ContentDefinitionId, DefinitionName, FieldName, PropertyDefinitionId, PropertyType,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{ValidatorConfig, ValidatorSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field every content definition starts with.
pub const NAME_FIELD: &str = "name";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub id: PropertyDefinitionId,
    pub name: FieldName,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub description: String,
    pub localized: bool,
    #[serde(default)]
    pub validators: ValidatorSet,
}

impl PropertyDefinition {
    pub fn new(
        id: PropertyDefinitionId,
        name: FieldName,
        property_type: PropertyType,
        description: impl Into<String>,
        localized: bool,
    ) -> Self {
        Self {
            id,
            name,
            property_type,
            description: description.into(),
            localized,
            validators: property_type.default_validators(),
        }
    }

    pub fn is_canonical_name(&self) -> bool {
        self.name.as_str() == NAME_FIELD
    }

    pub fn upsert_validator(&mut self, config: ValidatorConfig) -> DomainResult<()> {
        let rule = config.rule();
        if !self.property_type.supports(rule) {
            return Err(DomainError::UnsupportedValidator {
                rule: rule.to_string(),
                property_type: self.property_type.to_string(),
            });
        }
        self.validators.insert(config);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDefinition {
    pub id: ContentDefinitionId,
    pub name: DefinitionName,
    #[serde(default)]
    pub description: String,
    pub property_definitions: BTreeMap<FieldName, PropertyDefinition>,
    #[serde(default)]
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentDefinition {
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        let name = FieldName::new(name).ok()?;
        self.property_definitions.get(&name)
    }

    pub fn property_by_id(&self, id: PropertyDefinitionId) -> Option<&PropertyDefinition> {
        self.property_definitions.values().find(|prop| prop.id == id)
    }

    pub fn property_by_id_mut(
        &mut self,
        id: PropertyDefinitionId,
    ) -> DomainResult<&mut PropertyDefinition> {
        self.property_definitions
            .values_mut()
            .find(|prop| prop.id == id)
            .ok_or_else(|| property_not_found(id))
    }

    /// Property definitions in field-name order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.property_definitions.values()
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

pub(crate) fn property_not_found(id: PropertyDefinitionId) -> DomainError {
    DomainError::NotFound(format!("property definition {id} not found"))
}
