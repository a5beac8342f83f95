// src/domain/errors.rs
use crate::domain::content::{PublishStatus, VersionNumber};
use crate::domain::validation::{ParseError, Violations};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("publish rejected: {0}")]
    ValidationFailed(Violations),
    #[error("content version {0} is not a draft")]
    NotDraft(VersionNumber),
    #[error("language '{0}' is missing")]
    MissingLanguage(String),
    #[error("language '{0}' already exists")]
    DuplicateLanguage(String),
    #[error("field '{0}' is missing")]
    MissingField(String),
    #[error("property name '{0}' is already taken")]
    DuplicateName(String),
    #[error("unknown property type '{0}'")]
    UnknownType(String),
    #[error("unknown validator '{0}'")]
    UnknownValidator(String),
    #[error("validator '{rule}' is not supported on {property_type} properties")]
    UnsupportedValidator { rule: String, property_type: String },
    #[error("invalid '{rule}' validator config: {reason}")]
    InvalidValidatorConfig { rule: String, reason: String },
    #[error("version {version} cannot move from {from} to {to}")]
    InvalidTransition {
        version: VersionNumber,
        from: PublishStatus,
        to: PublishStatus,
    },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<ParseError> for DomainError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownRule(rule) => Self::UnknownValidator(rule),
            ParseError::InvalidConfig { rule, reason } => Self::InvalidValidatorConfig {
                rule: rule.to_string(),
                reason,
            },
        }
    }
}
