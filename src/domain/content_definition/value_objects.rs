// src/domain/content_definition/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{RuleName, ValidatorConfig, ValidatorSet};
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDefinitionId(Uuid);

impl ContentDefinitionId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ContentDefinitionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ContentDefinitionId> for Uuid {
    fn from(value: ContentDefinitionId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stable identity of a property; survives renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyDefinitionId(Uuid);

impl PropertyDefinitionId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PropertyDefinitionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<PropertyDefinitionId> for Uuid {
    fn from(value: PropertyDefinitionId) -> Self {
        value.0
    }
}

impl fmt::Display for PropertyDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DefinitionName(String);

impl DefinitionName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "content definition name cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefinitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DefinitionName> for String {
    fn from(value: DefinitionName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DefinitionName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Field name, normalized to trimmed lower case wherever it is created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = value.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation("field name cannot be empty".into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FieldName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Text,
    Number,
    Bool,
}

impl PropertyType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Bool => "bool",
        }
    }

    pub const fn supports(self, rule: RuleName) -> bool {
        matches!(
            (self, rule),
            (_, RuleName::Required)
                | (Self::Text, RuleName::Pattern | RuleName::Range)
                | (Self::Number, RuleName::Range)
        )
    }

    /// Validators seeded on a freshly defined property: an optional
    /// `required` plus disabled type-specific rules ready to be configured.
    pub fn default_validators(self) -> ValidatorSet {
        let set = ValidatorSet::new().with(ValidatorConfig::Required(false));
        let unbounded = ValidatorConfig::Range {
            min: None,
            max: None,
        };
        match self {
            Self::Text => set
                .with(ValidatorConfig::Pattern(String::new()))
                .with(unbounded),
            Self::Number => set.with(unbounded),
            Self::Bool => set,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "bool" => Ok(Self::Bool),
            _ => Err(DomainError::UnknownType(s.to_owned())),
        }
    }
}
