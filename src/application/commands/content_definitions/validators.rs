// src/application/commands/content_definitions/validators.rs
use super::ContentDefinitionCommandService;
use crate::{
    application::{dto::ContentDefinitionDto, error::ApplicationResult},
    domain::content_definition::{
        ContentDefinitionFactory, ContentDefinitionId, PropertyDefinitionId,
    },
};
use serde_json::Value;
use uuid::Uuid;

/// Adds or replaces one validator on a property.
pub struct UpsertValidatorCommand {
    pub content_definition_id: Uuid,
    pub property_id: Uuid,
    pub rule: String,
    pub config: Value,
}

impl ContentDefinitionCommandService {
    pub async fn upsert_validator(
        &self,
        command: UpsertValidatorCommand,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let definition_id = ContentDefinitionId::new(command.content_definition_id);
        let property_id = PropertyDefinitionId::new(command.property_id);
        let rule = command.rule.clone();

        let updated = self
            .edit(definition_id, move |definition, now| {
                ContentDefinitionFactory::upsert_validator(
                    definition,
                    property_id,
                    &command.rule,
                    &command.config,
                    now,
                )
            })
            .await?;

        tracing::info!(
            content_definition_id = %definition_id,
            property_id = %property_id,
            rule = %rule,
            "validator upserted"
        );
        Ok(updated)
    }
}
