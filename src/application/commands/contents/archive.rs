// src/application/commands/contents/archive.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{content::ContentId, workspace::WorkspaceId},
};
use uuid::Uuid;

pub struct ArchiveContentCommand {
    pub content_id: Uuid,
    pub workspace_id: Uuid,
}

impl ContentCommandService {
    pub async fn archive_content(
        &self,
        command: ArchiveContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let content_id = ContentId::new(command.content_id);
        let policy = self.archive_policy;
        let now = self.clock.now();

        let updated = self
            .content_repo
            .update_content(
                content_id,
                WorkspaceId::new(command.workspace_id),
                Box::new(move |mut content| {
                    if !content.archive(policy, now) {
                        tracing::debug!(content_id = %content.id, "content already archived");
                    }
                    Ok(content)
                }),
            )
            .await?;

        tracing::info!(content_id = %content_id, policy = %policy, "content archived");
        ContentDto::with_version(updated, None)
    }
}
