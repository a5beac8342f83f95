// src/application/commands/contents/new_version.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{
        content::{ContentFactory, ContentId, VersionNumber},
        errors::DomainError,
        workspace::WorkspaceId,
    },
};
use uuid::Uuid;

/// Derives a new draft under the content definition as it stands now.
/// `base_version` defaults to the newest version.
pub struct CreateContentVersionCommand {
    pub content_id: Uuid,
    pub base_version: Option<u32>,
    pub workspace_id: Uuid,
}

impl ContentCommandService {
    pub async fn create_content_version(
        &self,
        command: CreateContentVersionCommand,
    ) -> ApplicationResult<ContentDto> {
        let workspace = self
            .load_workspace(WorkspaceId::new(command.workspace_id))
            .await?;
        let default_locale = workspace.default_locale()?.clone();
        let content_id = ContentId::new(command.content_id);
        let content = self.load_content(content_id, workspace.id).await?;
        let definition = self.load_definition(content.content_definition_id).await?;
        let base_version = command.base_version.map(VersionNumber::new);
        let now = self.clock.now();

        let updated = self
            .content_repo
            .update_content(
                content_id,
                workspace.id,
                Box::new(move |mut content| {
                    let base = match base_version {
                        Some(base) => base,
                        None => content
                            .latest_version()
                            .map(|version| version.version)
                            .ok_or_else(|| {
                                DomainError::NotFound(format!(
                                    "content {} has no versions",
                                    content.id
                                ))
                            })?,
                    };
                    let version = ContentFactory::new_content_version(
                        &content,
                        &definition,
                        base,
                        &default_locale,
                        now,
                    )?;
                    content.append_version(version)?;
                    Ok(content)
                }),
            )
            .await?;

        let created = updated
            .latest_version()
            .map_or(VersionNumber::FIRST, |version| version.version);
        tracing::info!(
            content_id = %content_id,
            version = %created,
            "content version derived"
        );
        ContentDto::with_version(updated, Some(created))
    }
}
