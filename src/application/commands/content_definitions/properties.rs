// src/application/commands/content_definitions/properties.rs
use super::ContentDefinitionCommandService;
use crate::{
    application::{dto::ContentDefinitionDto, error::ApplicationResult},
    domain::content_definition::{
        ContentDefinitionFactory, ContentDefinitionId, PropertyDefinitionId,
        PropertyDefinitionPatch,
    },
};
use serde_json::{Map, Value};
use uuid::Uuid;

pub struct AddPropertyDefinitionCommand {
    pub content_definition_id: Uuid,
    pub name: String,
    pub property_type: String,
    pub description: String,
    pub localized: bool,
}

pub struct RenamePropertyDefinitionCommand {
    pub content_definition_id: Uuid,
    pub property_id: Uuid,
    pub name: String,
}

/// Reconfigures a property. `validators` may only touch rules the property
/// already declares.
pub struct UpdatePropertyDefinitionCommand {
    pub content_definition_id: Uuid,
    pub property_id: Uuid,
    pub description: Option<String>,
    pub localized: Option<bool>,
    pub validators: Map<String, Value>,
}

pub struct DeletePropertyDefinitionCommand {
    pub content_definition_id: Uuid,
    pub property_id: Uuid,
}

impl ContentDefinitionCommandService {
    pub async fn add_property_definition(
        &self,
        command: AddPropertyDefinitionCommand,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let definition_id = ContentDefinitionId::new(command.content_definition_id);
        let property_id = PropertyDefinitionId::new(self.ids.new_id());
        let name = command.name.clone();

        let updated = self
            .edit(definition_id, move |definition, now| {
                ContentDefinitionFactory::new_property_definition(
                    definition,
                    property_id,
                    &command.name,
                    &command.property_type,
                    &command.description,
                    command.localized,
                    now,
                )
                .map(|_| ())
            })
            .await?;

        tracing::info!(
            content_definition_id = %definition_id,
            property_id = %property_id,
            name = %name,
            "property definition added"
        );
        Ok(updated)
    }

    pub async fn rename_property_definition(
        &self,
        command: RenamePropertyDefinitionCommand,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let definition_id = ContentDefinitionId::new(command.content_definition_id);
        let property_id = PropertyDefinitionId::new(command.property_id);
        let name = command.name.clone();

        let updated = self
            .edit(definition_id, move |definition, now| {
                ContentDefinitionFactory::rename_property_definition(
                    definition,
                    property_id,
                    &command.name,
                    now,
                )
            })
            .await?;

        tracing::info!(
            content_definition_id = %definition_id,
            property_id = %property_id,
            name = %name,
            "property definition renamed"
        );
        Ok(updated)
    }

    pub async fn update_property_definition(
        &self,
        command: UpdatePropertyDefinitionCommand,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let definition_id = ContentDefinitionId::new(command.content_definition_id);
        let property_id = PropertyDefinitionId::new(command.property_id);
        let patch = PropertyDefinitionPatch {
            description: command.description,
            localized: command.localized,
            validators: command.validators,
        };

        let updated = self
            .edit(definition_id, move |definition, now| {
                ContentDefinitionFactory::update_property_definition(
                    definition,
                    property_id,
                    patch,
                    now,
                )
            })
            .await?;

        tracing::info!(
            content_definition_id = %definition_id,
            property_id = %property_id,
            "property definition updated"
        );
        Ok(updated)
    }

    pub async fn delete_property_definition(
        &self,
        command: DeletePropertyDefinitionCommand,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let definition_id = ContentDefinitionId::new(command.content_definition_id);
        let property_id = PropertyDefinitionId::new(command.property_id);

        let updated = self
            .edit(definition_id, move |definition, now| {
                ContentDefinitionFactory::delete_property_definition(definition, property_id, now)
                    .map(|_| ())
            })
            .await?;

        tracing::info!(
            content_definition_id = %definition_id,
            property_id = %property_id,
            "property definition deleted"
        );
        Ok(updated)
    }
}
