// src/config.rs
use crate::domain::content::{ArchivePolicy, Locale, PublishPolicy};
use crate::domain::workspace::WorkspaceId;
use std::env;
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: String,
    allowed_origins: Vec<String>,
    default_workspace_id: WorkspaceId,
    default_workspace_languages: Vec<Locale>,
    publish_policy: PublishPolicy,
    archive_policy: ArchivePolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, reading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but against an arbitrary key source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|value| split_list(&value))
            .unwrap_or_else(default_allowed_origins);

        let default_workspace_id = match lookup("DEFAULT_WORKSPACE_ID") {
            Some(raw) => Uuid::parse_str(raw.trim()).map_err(|err| {
                ConfigError::Invalid(format!("DEFAULT_WORKSPACE_ID is not a UUID: {err}"))
            })?,
            None => Uuid::nil(),
        };

        let languages = lookup("DEFAULT_WORKSPACE_LANGUAGES")
            .map(|value| split_list(&value))
            .unwrap_or_else(|| vec!["en-US".into()]);
        if languages.is_empty() {
            return Err(ConfigError::Missing("DEFAULT_WORKSPACE_LANGUAGES"));
        }
        let default_workspace_languages = languages
            .iter()
            .map(Locale::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let publish_policy = match lookup("PUBLISH_POLICY") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|err| ConfigError::Invalid(format!("PUBLISH_POLICY: {err}")))?,
            None => PublishPolicy::default(),
        };
        let archive_policy = match lookup("ARCHIVE_POLICY") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|err| ConfigError::Invalid(format!("ARCHIVE_POLICY: {err}")))?,
            None => ArchivePolicy::default(),
        };

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            default_workspace_id: WorkspaceId::new(default_workspace_id),
            default_workspace_languages,
            publish_policy,
            archive_policy,
        })
    }

    /// `None` selects the in-memory store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn default_workspace_id(&self) -> WorkspaceId {
        self.default_workspace_id
    }

    pub fn default_workspace_languages(&self) -> &[Locale] {
        &self.default_workspace_languages
    }

    pub const fn publish_policy(&self) -> PublishPolicy {
        self.publish_policy
    }

    pub const fn archive_policy(&self) -> ArchivePolicy {
        self.archive_policy
    }
}
