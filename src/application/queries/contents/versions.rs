use super::ContentQueryService;
use crate::{
    application::{dto::VersionSummaryDto, error::ApplicationResult},
    domain::{content::ContentId, workspace::WorkspaceId},
};
use uuid::Uuid;

pub struct ListVersionsQuery {
    pub content_id: Uuid,
    pub workspace_id: Uuid,
}

impl ContentQueryService {
    pub async fn list_versions(
        &self,
        query: ListVersionsQuery,
    ) -> ApplicationResult<Vec<VersionSummaryDto>> {
        let versions = self
            .content_repo
            .list_versions(
                ContentId::new(query.content_id),
                WorkspaceId::new(query.workspace_id),
            )
            .await?;
        Ok(versions.into_iter().map(Into::into).collect())
    }
}
