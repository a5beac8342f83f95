// src/application/commands/contents/publish.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{
        content::{ContentId, PublishGate, VersionNumber},
        errors::DomainError,
        workspace::WorkspaceId,
    },
};
use uuid::Uuid;

pub struct PublishContentCommand {
    pub content_id: Uuid,
    pub version: u32,
    pub workspace_id: Uuid,
}

impl ContentCommandService {
    /// Runs the publish gate over the workspace's languages and, when it
    /// passes, makes the version live. Gate and transition commit as one
    /// repository update.
    pub async fn publish_content(
        &self,
        command: PublishContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let workspace = self
            .load_workspace(WorkspaceId::new(command.workspace_id))
            .await?;
        let content_id = ContentId::new(command.content_id);
        let content = self.load_content(content_id, workspace.id).await?;
        let definition = self.load_definition(content.content_definition_id).await?;
        let number = VersionNumber::new(command.version);
        let languages = workspace.languages;
        let policy = self.publish_policy;
        let now = self.clock.now();

        let result = self
            .content_repo
            .update_content(
                content_id,
                workspace.id,
                Box::new(move |mut content| {
                    let gate = PublishGate::new(&definition, &languages, policy);
                    gate.check(content.version(number)?)?;
                    content.publish(number, now)?;
                    Ok(content)
                }),
            )
            .await;

        let updated = match result {
            Ok(updated) => updated,
            Err(DomainError::ValidationFailed(violations)) => {
                tracing::warn!(
                    content_id = %content_id,
                    version = %number,
                    violations = violations.len(),
                    first = ?violations.first(),
                    "publish rejected by validators"
                );
                return Err(DomainError::ValidationFailed(violations).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            content_id = %content_id,
            version = %number,
            "content published"
        );
        ContentDto::with_version(updated, Some(number))
    }
}
