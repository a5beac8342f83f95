// src/application/commands/contents/create.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{
        content::{ContentFactory, ContentId},
        content_definition::ContentDefinitionId,
        workspace::WorkspaceId,
    },
};
use uuid::Uuid;

pub struct CreateContentCommand {
    pub content_definition_id: Uuid,
    pub workspace_id: Uuid,
    pub parent_id: Option<Uuid>,
}

impl ContentCommandService {
    pub async fn create_content(
        &self,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let workspace = self
            .load_workspace(WorkspaceId::new(command.workspace_id))
            .await?;
        let definition = self
            .load_definition(ContentDefinitionId::new(command.content_definition_id))
            .await?;
        let parent_id = command.parent_id.map(ContentId::new);
        if let Some(parent_id) = parent_id {
            self.load_content(parent_id, workspace.id).await?;
        }

        let content = ContentFactory::new_content(
            ContentId::new(self.ids.new_id()),
            &definition,
            workspace.id,
            workspace.default_locale()?,
            parent_id,
            self.clock.now(),
        )?;

        let id = self.content_repo.create(content.clone()).await?;
        tracing::info!(
            content_id = %id,
            content_definition_id = %definition.id,
            workspace_id = %workspace.id,
            "content created"
        );
        ContentDto::with_version(content, None)
    }
}
