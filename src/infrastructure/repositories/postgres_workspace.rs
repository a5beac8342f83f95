// src/infrastructure/repositories/postgres_workspace.rs
use super::map_sqlx;
use crate::domain::content::Locale;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::workspace::{Workspace, WorkspaceId, WorkspaceRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresWorkspaceRepository {
    pool: PgPool,
}

impl PostgresWorkspaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WorkspaceRow {
    id: Uuid,
    name: String,
    languages: Json<Vec<Locale>>,
    tags: Json<Vec<String>>,
}

impl TryFrom<WorkspaceRow> for Workspace {
    type Error = DomainError;

    fn try_from(row: WorkspaceRow) -> Result<Self, Self::Error> {
        let mut workspace = Workspace::new(WorkspaceId::new(row.id), row.name, row.languages.0)?;
        workspace.tags = row.tags.0;
        Ok(workspace)
    }
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepository {
    async fn get(&self, id: WorkspaceId) -> DomainResult<Option<Workspace>> {
        let row = sqlx::query_as::<_, WorkspaceRow>(
            "SELECT id, name, languages, tags FROM workspaces WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Workspace::try_from).transpose()
    }

    async fn upsert(&self, workspace: Workspace) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO workspaces (id, name, languages, tags) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE
             SET name = EXCLUDED.name, languages = EXCLUDED.languages, tags = EXCLUDED.tags",
        )
        .bind(workspace.id.as_uuid())
        .bind(&workspace.name)
        .bind(Json(&workspace.languages))
        .bind(Json(&workspace.tags))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}
