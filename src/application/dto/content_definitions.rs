use crate::domain::content_definition::{ContentDefinition, PropertyDefinition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyDefinitionDto {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
    pub localized: bool,
    /// Rule name to its raw configuration.
    #[schema(value_type = Object)]
    pub validators: Map<String, Value>,
}

impl From<PropertyDefinition> for PropertyDefinitionDto {
    fn from(property: PropertyDefinition) -> Self {
        Self {
            id: property.id.as_uuid(),
            validators: property.validators.to_raw(),
            name: property.name.into(),
            property_type: property.property_type.to_string(),
            description: property.description,
            localized: property.localized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentDefinitionDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Ordered by field name.
    pub properties: Vec<PropertyDefinitionDto>,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentDefinition> for ContentDefinitionDto {
    fn from(definition: ContentDefinition) -> Self {
        Self {
            id: definition.id.as_uuid(),
            name: definition.name.into(),
            description: definition.description,
            properties: definition
                .property_definitions
                .into_values()
                .map(Into::into)
                .collect(),
            revision: definition.revision,
            created_at: definition.created_at,
            updated_at: definition.updated_at,
        }
    }
}
