use super::ContentQueryService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{content_definition::ContentDefinitionId, workspace::WorkspaceId},
};
use uuid::Uuid;

/// Lists non-archived content of any of the given definitions.
pub struct ListContentByDefinitionQuery {
    pub content_definition_ids: Vec<Uuid>,
    pub workspace_id: Uuid,
}

impl ContentQueryService {
    pub async fn list_by_content_definition(
        &self,
        query: ListContentByDefinitionQuery,
    ) -> ApplicationResult<Vec<ContentDto>> {
        let ids: Vec<ContentDefinitionId> = query
            .content_definition_ids
            .into_iter()
            .map(ContentDefinitionId::new)
            .collect();
        let contents = self
            .content_repo
            .list_by_content_definition(&ids, WorkspaceId::new(query.workspace_id))
            .await?;

        contents
            .into_iter()
            .map(|content| ContentDto::with_version(content, None))
            .collect()
    }
}
