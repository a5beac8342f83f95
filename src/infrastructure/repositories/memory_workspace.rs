use crate::domain::errors::DomainResult;
use crate::domain::workspace::{Workspace, WorkspaceId, WorkspaceRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorkspaceRepository {
    workspaces: RwLock<HashMap<WorkspaceId, Workspace>>,
}

impl InMemoryWorkspaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn get(&self, id: WorkspaceId) -> DomainResult<Option<Workspace>> {
        Ok(self.workspaces.read().await.get(&id).cloned())
    }

    async fn upsert(&self, workspace: Workspace) -> DomainResult<()> {
        self.workspaces.write().await.insert(workspace.id, workspace);
        Ok(())
    }
}
