// src/domain/content/repository.rs
use crate::domain::content::entity::{Content, ContentVersion};
use crate::domain::content::value_objects::{ContentId, Locale, PublishStatus, VersionNumber};
use crate::domain::content_definition::ContentDefinitionId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::workspace::WorkspaceId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Pure read-modify-write step applied by [`ContentRepository::update_content`].
pub type ContentMutation = Box<dyn FnOnce(Content) -> DomainResult<Content> + Send>;

/// Like [`ContentMutation`] but scoped to a single version.
pub type VersionMutation =
    Box<dyn FnOnce(ContentVersion) -> DomainResult<ContentVersion> + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSummary {
    pub version: VersionNumber,
    pub status: PublishStatus,
    pub languages: Vec<Locale>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ContentVersion> for VersionSummary {
    fn from(version: &ContentVersion) -> Self {
        Self {
            version: version.version,
            status: version.status,
            languages: version.locales().cloned().collect(),
            created_at: version.created_at,
            updated_at: version.updated_at,
        }
    }
}

pub(crate) fn content_not_found(id: ContentId) -> DomainError {
    DomainError::NotFound(format!("content {id} not found"))
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create(&self, content: Content) -> DomainResult<ContentId>;

    /// Loads the whole aggregate; picking a version is left to the caller.
    async fn get_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
    ) -> DomainResult<Option<Content>>;

    /// Loads the content, applies `mutation` and writes it back. Fails with
    /// `Conflict` when another writer committed in between.
    async fn update_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
        mutation: ContentMutation,
    ) -> DomainResult<Content>;

    /// Non-archived content of the given definitions, oldest first.
    async fn list_by_content_definition(
        &self,
        definition_ids: &[ContentDefinitionId],
        workspace_id: WorkspaceId,
    ) -> DomainResult<Vec<Content>>;

    async fn list_versions(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
    ) -> DomainResult<Vec<VersionSummary>> {
        let content = self
            .get_content(id, workspace_id)
            .await?
            .ok_or_else(|| content_not_found(id))?;
        Ok(content.versions.values().map(VersionSummary::from).collect())
    }

    async fn update_content_data(
        &self,
        id: ContentId,
        version: VersionNumber,
        workspace_id: WorkspaceId,
        mutation: VersionMutation,
    ) -> DomainResult<Content> {
        self.update_content(
            id,
            workspace_id,
            Box::new(move |mut content| {
                let current = content.version(version)?.clone();
                let updated = mutation(current)?;
                if updated.version != version {
                    return Err(DomainError::Validation(format!(
                        "version {version} cannot be renumbered to {}",
                        updated.version
                    )));
                }
                content.updated_at = content.updated_at.max(updated.updated_at);
                content.versions.insert(version, updated);
                Ok(content)
            }),
        )
        .await
    }
}
