use super::memory_store::DocumentStore;
use crate::domain::content_definition::{
    ContentDefinition, ContentDefinitionId, ContentDefinitionMutation,
    ContentDefinitionRepository,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

pub struct InMemoryContentDefinitionRepository {
    store: DocumentStore<ContentDefinitionId, ContentDefinition>,
}

impl InMemoryContentDefinitionRepository {
    pub fn new() -> Self {
        Self {
            store: DocumentStore::new("content definition"),
        }
    }
}

impl Default for InMemoryContentDefinitionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentDefinitionRepository for InMemoryContentDefinitionRepository {
    async fn create(&self, definition: ContentDefinition) -> DomainResult<ContentDefinitionId> {
        let id = definition.id;
        self.store.insert(id, definition).await?;
        Ok(id)
    }

    async fn get(&self, id: ContentDefinitionId) -> DomainResult<Option<ContentDefinition>> {
        Ok(self.store.get(id).await)
    }

    async fn list(&self) -> DomainResult<Vec<ContentDefinition>> {
        let mut definitions = self.store.values().await;
        definitions.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()).then(a.id.cmp(&b.id)));
        Ok(definitions)
    }

    async fn update(
        &self,
        id: ContentDefinitionId,
        mutation: ContentDefinitionMutation,
    ) -> DomainResult<ContentDefinition> {
        self.store.update(id, |_| true, mutation).await
    }
}
