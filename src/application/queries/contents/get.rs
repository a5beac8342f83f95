use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentId, VersionNumber},
        workspace::WorkspaceId,
    },
};
use uuid::Uuid;

/// Without `version` the published version is returned, falling back to
/// the newest one. Archived content stays retrievable here.
pub struct GetContentQuery {
    pub id: Uuid,
    pub version: Option<u32>,
    pub workspace_id: Uuid,
}

impl ContentQueryService {
    pub async fn get_content(&self, query: GetContentQuery) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(query.id);
        let content = self
            .content_repo
            .get_content(id, WorkspaceId::new(query.workspace_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("content {id} not found")))?;
        ContentDto::with_version(content, query.version.map(VersionNumber::new))
    }
}
