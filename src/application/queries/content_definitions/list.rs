use super::ContentDefinitionQueryService;
use crate::application::{dto::ContentDefinitionDto, error::ApplicationResult};

pub struct ListContentDefinitionsQuery;

impl ContentDefinitionQueryService {
    pub async fn list_content_definitions(
        &self,
        _query: ListContentDefinitionsQuery,
    ) -> ApplicationResult<Vec<ContentDefinitionDto>> {
        let definitions = self.repo.list().await?;
        Ok(definitions.into_iter().map(Into::into).collect())
    }
}
