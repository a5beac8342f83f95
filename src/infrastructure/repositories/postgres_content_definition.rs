// src/infrastructure/repositories/postgres_content_definition.rs
use super::{map_sqlx, revision_from_db, revision_to_db};
use crate::domain::content_definition::{
    ContentDefinition, ContentDefinitionId, ContentDefinitionMutation,
    ContentDefinitionRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};

#[derive(Clone)]
pub struct PostgresContentDefinitionRepository {
    pool: PgPool,
}

impl PostgresContentDefinitionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentDefinitionRow {
    document: Json<ContentDefinition>,
    revision: i64,
}

impl TryFrom<ContentDefinitionRow> for ContentDefinition {
    type Error = DomainError;

    fn try_from(row: ContentDefinitionRow) -> Result<Self, Self::Error> {
        let mut definition = row.document.0;
        definition.revision = revision_from_db(row.revision)?;
        Ok(definition)
    }
}

#[async_trait]
impl ContentDefinitionRepository for PostgresContentDefinitionRepository {
    async fn create(&self, definition: ContentDefinition) -> DomainResult<ContentDefinitionId> {
        sqlx::query(
            "INSERT INTO content_definitions (id, name, document, revision, created_at, updated_at)
             VALUES ($1, $2, $3, 0, $4, $5)",
        )
        .bind(definition.id.as_uuid())
        .bind(definition.name.as_str())
        .bind(Json(&definition))
        .bind(definition.created_at)
        .bind(definition.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(definition.id)
    }

    async fn get(&self, id: ContentDefinitionId) -> DomainResult<Option<ContentDefinition>> {
        let row = sqlx::query_as::<_, ContentDefinitionRow>(
            "SELECT document, revision FROM content_definitions WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentDefinition::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ContentDefinition>> {
        let rows = sqlx::query_as::<_, ContentDefinitionRow>(
            "SELECT document, revision FROM content_definitions ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ContentDefinition::try_from).collect()
    }

    async fn update(
        &self,
        id: ContentDefinitionId,
        mutation: ContentDefinitionMutation,
    ) -> DomainResult<ContentDefinition> {
        let loaded = self
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("content definition {id} not found")))?;
        let expected = loaded.revision;

        let mut updated = mutation(loaded)?;
        updated.revision = expected + 1;

        let result = sqlx::query(
            "UPDATE content_definitions
             SET name = $3, document = $4, revision = revision + 1, updated_at = $5
             WHERE id = $1 AND revision = $2",
        )
        .bind(id.as_uuid())
        .bind(revision_to_db(expected)?)
        .bind(updated.name.as_str())
        .bind(Json(&updated))
        .bind(updated.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(
                "content definition update conflict, please retry".into(),
            ));
        }
        Ok(updated)
    }
}
