// src/application/commands/contents/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{ids::IdGenerator, time::Clock},
    },
    domain::{
        content::{ArchivePolicy, Content, ContentId, ContentRepository, PublishPolicy},
        content_definition::{ContentDefinition, ContentDefinitionId, ContentDefinitionRepository},
        workspace::{Workspace, WorkspaceId, WorkspaceRepository},
    },
};

pub struct ContentCommandService {
    pub(super) content_repo: Arc<dyn ContentRepository>,
    pub(super) definition_repo: Arc<dyn ContentDefinitionRepository>,
    pub(super) workspace_repo: Arc<dyn WorkspaceRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
    pub(super) publish_policy: PublishPolicy,
    pub(super) archive_policy: ArchivePolicy,
}

impl ContentCommandService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        definition_repo: Arc<dyn ContentDefinitionRepository>,
        workspace_repo: Arc<dyn WorkspaceRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            content_repo,
            definition_repo,
            workspace_repo,
            clock,
            ids,
            publish_policy: PublishPolicy::default(),
            archive_policy: ArchivePolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policies(
        mut self,
        publish_policy: PublishPolicy,
        archive_policy: ArchivePolicy,
    ) -> Self {
        self.publish_policy = publish_policy;
        self.archive_policy = archive_policy;
        self
    }

    pub(super) async fn load_workspace(&self, id: WorkspaceId) -> ApplicationResult<Workspace> {
        self.workspace_repo
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("workspace {id} not found")))
    }

    pub(super) async fn load_definition(
        &self,
        id: ContentDefinitionId,
    ) -> ApplicationResult<ContentDefinition> {
        self.definition_repo
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("content definition {id} not found")))
    }

    pub(super) async fn load_content(
        &self,
        id: ContentId,
        workspace_id: WorkspaceId,
    ) -> ApplicationResult<Content> {
        self.content_repo
            .get_content(id, workspace_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("content {id} not found")))
    }
}
