use super::ContentDefinitionQueryService;
use crate::{
    application::{
        dto::ContentDefinitionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content_definition::ContentDefinitionId,
};
use uuid::Uuid;

pub struct GetContentDefinitionQuery {
    pub id: Uuid,
}

impl ContentDefinitionQueryService {
    pub async fn get_content_definition(
        &self,
        query: GetContentDefinitionQuery,
    ) -> ApplicationResult<ContentDefinitionDto> {
        let id = ContentDefinitionId::new(query.id);
        let definition = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("content definition {id} not found")))?;
        Ok(definition.into())
    }
}
