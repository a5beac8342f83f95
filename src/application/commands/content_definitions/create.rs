// src/application/commands/content_definitions/create.rs
use super::ContentDefinitionCommandService;
use crate::{
    application::{dto::ContentDefinitionDto, error::ApplicationResult},
    domain::content_definition::{
        ContentDefinitionFactory, ContentDefinitionId, PropertyDefinitionId,
    },
};

pub struct CreateContentDefinitionCommand {
    pub name: String,
    pub description: String,
}

impl ContentDefinitionCommandService {
    pub async fn create_content_definition(
        &self,
        command: CreateContentDefinitionCommand,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let definition = ContentDefinitionFactory::new_content_definition(
            ContentDefinitionId::new(self.ids.new_id()),
            PropertyDefinitionId::new(self.ids.new_id()),
            &command.name,
            &command.description,
            self.clock.now(),
        )?;

        let id = self.repo.create(definition.clone()).await?;
        tracing::info!(content_definition_id = %id, name = %definition.name, "content definition created");
        Ok(definition.into())
    }
}
