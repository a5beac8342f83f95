// src/domain/content_definition/repository.rs
use crate::domain::content_definition::entity::{ContentDefinition, PropertyDefinition};
use crate::domain::content_definition::value_objects::{ContentDefinitionId, PropertyDefinitionId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// Pure read-modify-write step applied by [`ContentDefinitionRepository::update`].
pub type ContentDefinitionMutation =
    Box<dyn FnOnce(ContentDefinition) -> DomainResult<ContentDefinition> + Send>;

#[async_trait]
pub trait ContentDefinitionRepository: Send + Sync {
    async fn create(&self, definition: ContentDefinition) -> DomainResult<ContentDefinitionId>;

    async fn get(&self, id: ContentDefinitionId) -> DomainResult<Option<ContentDefinition>>;

    async fn list(&self) -> DomainResult<Vec<ContentDefinition>>;

    /// Loads the definition, applies `mutation` and writes the result back.
    /// Fails with `Conflict` when the stored revision moved in between.
    async fn update(
        &self,
        id: ContentDefinitionId,
        mutation: ContentDefinitionMutation,
    ) -> DomainResult<ContentDefinition>;

    async fn get_property(
        &self,
        id: ContentDefinitionId,
        property_id: PropertyDefinitionId,
    ) -> DomainResult<PropertyDefinition> {
        let definition = self
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("content definition {id} not found")))?;
        definition
            .property_by_id(property_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::NotFound(format!("property definition {property_id} not found"))
            })
    }
}
