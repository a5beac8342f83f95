// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            content_definitions::ContentDefinitionCommandService,
            contents::ContentCommandService,
        },
        ports::{ids::IdGenerator, time::Clock},
        queries::{
            content_definitions::ContentDefinitionQueryService, contents::ContentQueryService,
        },
    },
    domain::{
        content::{ArchivePolicy, ContentRepository, PublishPolicy},
        content_definition::ContentDefinitionRepository,
        workspace::WorkspaceRepository,
    },
};

/// Workflow knobs that are read from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowPolicies {
    pub publish: PublishPolicy,
    pub archive: ArchivePolicy,
}

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub content_definition_commands: Arc<ContentDefinitionCommandService>,
    pub content_definition_queries: Arc<ContentDefinitionQueryService>,
}

impl ApplicationServices {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        definition_repo: Arc<dyn ContentDefinitionRepository>,
        workspace_repo: Arc<dyn WorkspaceRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        policies: WorkflowPolicies,
    ) -> Self {
        let content_commands = Arc::new(
            ContentCommandService::new(
                Arc::clone(&content_repo),
                Arc::clone(&definition_repo),
                workspace_repo,
                Arc::clone(&clock),
                Arc::clone(&ids),
            )
            .with_policies(policies.publish, policies.archive),
        );
        let content_queries = Arc::new(ContentQueryService::new(Arc::clone(&content_repo)));

        let content_definition_commands = Arc::new(ContentDefinitionCommandService::new(
            Arc::clone(&definition_repo),
            Arc::clone(&clock),
            Arc::clone(&ids),
        ));
        let content_definition_queries =
            Arc::new(ContentDefinitionQueryService::new(Arc::clone(&definition_repo)));

        Self {
            content_commands,
            content_queries,
            content_definition_commands,
            content_definition_queries,
        }
    }
}
