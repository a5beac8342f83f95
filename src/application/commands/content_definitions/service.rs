// src/application/commands/content_definitions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ContentDefinitionDto,
        error::ApplicationResult,
        ports::{ids::IdGenerator, time::Clock},
    },
    domain::{
        content_definition::{ContentDefinition, ContentDefinitionId, ContentDefinitionRepository},
        errors::DomainResult,
    },
};
use chrono::{DateTime, Utc};

pub struct ContentDefinitionCommandService {
    pub(super) repo: Arc<dyn ContentDefinitionRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

impl ContentDefinitionCommandService {
    pub fn new(
        repo: Arc<dyn ContentDefinitionRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repo, clock, ids }
    }

    /// Applies one schema edit through the repository's read-modify-write
    /// primitive.
    pub(super) async fn edit<F>(
        &self,
        id: ContentDefinitionId,
        edit: F,
    ) -> ApplicationResult<ContentDefinitionDto>
    where
        F: FnOnce(&mut ContentDefinition, DateTime<Utc>) -> DomainResult<()> + Send + 'static,
    {
        let now = self.clock.now();
        let updated = self
            .repo
            .update(
                id,
                Box::new(move |mut definition| {
                    edit(&mut definition, now)?;
                    Ok(definition)
                }),
            )
            .await?;
        Ok(updated.into())
    }
}
