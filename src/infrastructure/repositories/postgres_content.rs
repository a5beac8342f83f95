// src/infrastructure/repositories/postgres_content.rs
use super::{map_sqlx, revision_from_db, revision_to_db};
use crate::domain::content::{Content, ContentId, ContentMutation, ContentRepository};
use crate::domain::content_definition::ContentDefinitionId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::workspace::WorkspaceId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

/// Stores each content aggregate as one JSONB document next to the columns
/// needed for scoping, listing and revision checks.
#[derive(Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    document: Json<Content>,
    revision: i64,
}

impl TryFrom<ContentRow> for Content {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let mut content = row.document.0;
        content.revision = revision_from_db(row.revision)?;
        Ok(content)
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn create(&self, content: Content) -> DomainResult<ContentId> {
        sqlx::query(
            "INSERT INTO contents (id, workspace_id, content_definition_id, status, document, revision, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, 0, $6, $7)",
        )
        .bind(content.id.as_uuid())
        .bind(content.workspace_id.as_uuid())
        .bind(content.content_definition_id.as_uuid())
        .bind(content.status.as_str())
        .bind(Json(&content))
        .bind(content.created_at)
        .bind(content.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(content.id)
    }

    async fn get_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
    ) -> DomainResult<Option<Content>> {
        let row = sqlx::query_as::<_, ContentRow>(
            "SELECT document, revision FROM contents WHERE id = $1 AND workspace_id = $2",
        )
        .bind(id.as_uuid())
        .bind(workspace_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Content::try_from).transpose()
    }

    async fn update_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
        mutation: ContentMutation,
    ) -> DomainResult<Content> {
        let loaded = self
            .get_content(id, workspace_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("content {id} not found")))?;
        let expected = loaded.revision;

        let mut updated = mutation(loaded)?;
        updated.revision = expected + 1;

        let result = sqlx::query(
            "UPDATE contents
             SET status = $3, document = $4, revision = revision + 1, updated_at = $5
             WHERE id = $1 AND revision = $2",
        )
        .bind(id.as_uuid())
        .bind(revision_to_db(expected)?)
        .bind(updated.status.as_str())
        .bind(Json(&updated))
        .bind(updated.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(
                "content update conflict, please retry".into(),
            ));
        }
        Ok(updated)
    }

    async fn list_by_content_definition(
        &self,
        definition_ids: &[ContentDefinitionId],
        workspace_id: WorkspaceId,
    ) -> DomainResult<Vec<Content>> {
        let ids: Vec<Uuid> = definition_ids.iter().map(|id| id.as_uuid()).collect();
        let rows = sqlx::query_as::<_, ContentRow>(
            "SELECT document, revision FROM contents
             WHERE workspace_id = $1 AND content_definition_id = ANY($2) AND status <> 'archived'
             ORDER BY created_at, id",
        )
        .bind(workspace_id.as_uuid())
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Content::try_from).collect()
    }
}
