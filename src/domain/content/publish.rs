// src/domain/content/publish.rs
use crate::domain::content::entity::{Content, ContentVersion, FieldValue};
use crate::domain::content::value_objects::{Locale, PublishStatus, VersionNumber};
use crate::domain::content_definition::{ContentDefinition, PropertyDefinition};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{Violation, Violations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How many violations the publish gate reports before giving up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishPolicy {
    #[default]
    FailFast,
    CollectAll,
}

impl FromStr for PublishPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fail_fast" => Ok(Self::FailFast),
            "collect_all" => Ok(Self::CollectAll),
            other => Err(DomainError::Validation(format!(
                "unknown publish policy '{other}'"
            ))),
        }
    }
}

/// Status given to the live version when its content is archived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchivePolicy {
    #[default]
    PreviouslyPublished,
    Archived,
}

impl ArchivePolicy {
    const fn target_status(self) -> PublishStatus {
        match self {
            Self::PreviouslyPublished => PublishStatus::PreviouslyPublished,
            Self::Archived => PublishStatus::Archived,
        }
    }
}

impl FromStr for ArchivePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "previously_published" => Ok(Self::PreviouslyPublished),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown archive policy '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PublishPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FailFast => "fail_fast",
            Self::CollectAll => "collect_all",
        })
    }
}

impl fmt::Display for ArchivePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target_status().as_str())
    }
}

/// Validator pass a version must clear before it may be published.
///
/// Localized properties are checked once per configured locale; a locale the
/// version does not carry yields a `Null` candidate. Non-localized properties
/// are checked once, against the default (first) locale. Fields are joined by
/// property id so stale field names in older versions still resolve.
#[derive(Debug, Clone, Copy)]
pub struct PublishGate<'a> {
    definition: &'a ContentDefinition,
    locales: &'a [Locale],
    policy: PublishPolicy,
}

impl<'a> PublishGate<'a> {
    pub const fn new(
        definition: &'a ContentDefinition,
        locales: &'a [Locale],
        policy: PublishPolicy,
    ) -> Self {
        Self {
            definition,
            locales,
            policy,
        }
    }

    pub fn check(&self, version: &ContentVersion) -> DomainResult<()> {
        let mut violations = Violations::default();

        for property in self.definition.properties() {
            for (locale, value) in self.candidates(property, version) {
                for validator in property.validators.iter() {
                    let Err(err) = validator.validate(value) else {
                        continue;
                    };
                    violations.push(Violation {
                        rule: err.rule,
                        field: property.name.to_string(),
                        locale: locale.to_string(),
                        reason: err.reason,
                    });
                    if self.policy == PublishPolicy::FailFast {
                        return Err(DomainError::ValidationFailed(violations));
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ValidationFailed(violations))
        }
    }

    fn candidates<'v>(
        &self,
        property: &PropertyDefinition,
        version: &'v ContentVersion,
    ) -> Vec<(&'a Locale, &'v FieldValue)> {
        // Non-localized values are mirrored, so one locale the version
        // actually holds is enough.
        let locales = if property.localized {
            self.locales
        } else {
            let held = self
                .locales
                .iter()
                .position(|locale| version.has_locale(locale))
                .unwrap_or(0);
            self.locales.get(held..=held).unwrap_or_default()
        };

        locales
            .iter()
            .map(|locale| {
                let value = version
                    .field_by_property(locale, property.id)
                    .map_or(&FieldValue::Null, |field| &field.value);
                (locale, value)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The target moved from Draft to Published; `replaced` went to
    /// PreviouslyPublished.
    Published { replaced: Option<VersionNumber> },
    AlreadyPublished,
}

impl Content {
    /// Moves `number` to Published. Callers run the [`PublishGate`] first;
    /// both happen inside one repository update so they commit together.
    pub fn publish(
        &mut self,
        number: VersionNumber,
        now: DateTime<Utc>,
    ) -> DomainResult<PublishOutcome> {
        let version = self.version_mut(number)?;
        match version.status {
            PublishStatus::Draft => {}
            PublishStatus::Published => {
                version.updated_at = now;
                self.updated_at = now;
                return Ok(PublishOutcome::AlreadyPublished);
            }
            from => {
                return Err(DomainError::InvalidTransition {
                    version: number,
                    from,
                    to: PublishStatus::Published,
                });
            }
        }
        version.status = PublishStatus::Published;
        version.updated_at = now;

        let mut replaced = None;
        for (other_number, other) in &mut self.versions {
            if *other_number != number && other.status == PublishStatus::Published {
                other.status = PublishStatus::PreviouslyPublished;
                other.updated_at = now;
                replaced = Some(*other_number);
            }
        }

        self.published_version = Some(number);
        self.status = PublishStatus::Published;
        self.updated_at = now;
        Ok(PublishOutcome::Published { replaced })
    }

    /// Takes the content out of circulation. Returns `false` when it was
    /// already archived.
    pub fn archive(&mut self, policy: ArchivePolicy, now: DateTime<Utc>) -> bool {
        if self.is_archived() {
            return false;
        }
        let live = self.published_version.take();
        if let Some(version) = live.and_then(|number| self.versions.get_mut(&number)) {
            version.status = policy.target_status();
            version.updated_at = now;
        }
        self.status = PublishStatus::Archived;
        self.updated_at = now;
        true
    }
}
