use super::memory_store::DocumentStore;
use crate::domain::content::{Content, ContentId, ContentMutation, ContentRepository};
use crate::domain::content_definition::ContentDefinitionId;
use crate::domain::errors::DomainResult;
use crate::domain::workspace::WorkspaceId;
use async_trait::async_trait;

pub struct InMemoryContentRepository {
    store: DocumentStore<ContentId, Content>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self {
            store: DocumentStore::new("content"),
        }
    }
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn create(&self, content: Content) -> DomainResult<ContentId> {
        let id = content.id;
        self.store.insert(id, content).await?;
        Ok(id)
    }

    async fn get_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
    ) -> DomainResult<Option<Content>> {
        Ok(self
            .store
            .get(id)
            .await
            .filter(|content| content.workspace_id == workspace_id))
    }

    async fn update_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
        mutation: ContentMutation,
    ) -> DomainResult<Content> {
        self.store
            .update(id, |content| content.workspace_id == workspace_id, mutation)
            .await
    }

    async fn list_by_content_definition(
        &self,
        definition_ids: &[ContentDefinitionId],
        workspace_id: WorkspaceId,
    ) -> DomainResult<Vec<Content>> {
        let mut contents: Vec<Content> = self
            .store
            .values()
            .await
            .into_iter()
            .filter(|content| {
                content.workspace_id == workspace_id
                    && !content.is_archived()
                    && definition_ids.contains(&content.content_definition_id)
            })
            .collect();
        contents.sort_by_key(|content| (content.created_at, content.id));
        Ok(contents)
    }
}
