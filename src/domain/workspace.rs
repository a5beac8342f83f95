// src/domain/workspace.rs
use crate::domain::content::Locale;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for WorkspaceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<WorkspaceId> for Uuid {
    fn from(value: WorkspaceId) -> Self {
        value.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tenant boundary for content. `languages` is ordered by priority and its
/// first entry is the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub languages: Vec<Locale>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Workspace {
    pub fn new(id: WorkspaceId, name: impl Into<String>, languages: Vec<Locale>) -> DomainResult<Self> {
        if languages.is_empty() {
            return Err(DomainError::Validation(
                "workspace needs at least one language".into(),
            ));
        }
        for (index, locale) in languages.iter().enumerate() {
            if languages[..index].contains(locale) {
                return Err(DomainError::DuplicateLanguage(locale.to_string()));
            }
        }
        Ok(Self {
            id,
            name: name.into(),
            languages,
            tags: Vec::new(),
        })
    }

    pub fn default_locale(&self) -> DomainResult<&Locale> {
        self.languages.first().ok_or_else(|| {
            DomainError::Validation(format!("workspace {} has no languages configured", self.id))
        })
    }

    pub fn supports(&self, locale: &Locale) -> bool {
        self.languages.contains(locale)
    }
}

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn get(&self, id: WorkspaceId) -> DomainResult<Option<Workspace>>;

    async fn upsert(&self, workspace: Workspace) -> DomainResult<()>;
}
