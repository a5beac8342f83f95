// src/domain/content/entity.rs
use crate::domain::content::value_objects::{ContentId, Locale, PublishStatus, VersionNumber};
use crate::domain::content_definition::{
    ContentDefinitionId, FieldName, PropertyDefinition, PropertyDefinitionId, PropertyType,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::workspace::WorkspaceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dynamically typed scalar; `Null` means unset.
pub type FieldValue = serde_json::Value;

/// One value instantiating a property definition. `id` is the join key
/// back to the schema; the map key it is stored under may go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentField {
    pub id: PropertyDefinitionId,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub localized: bool,
    #[serde(default)]
    pub value: FieldValue,
}

impl ContentField {
    pub fn from_definition(definition: &PropertyDefinition, value: FieldValue) -> Self {
        Self {
            id: definition.id,
            property_type: definition.property_type,
            localized: definition.localized,
            value,
        }
    }

    pub fn empty(definition: &PropertyDefinition) -> Self {
        Self::from_definition(definition, FieldValue::Null)
    }
}

pub type ContentFields = BTreeMap<FieldName, ContentField>;

pub type ContentLanguage = BTreeMap<Locale, ContentFields>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVersion {
    pub version: VersionNumber,
    pub status: PublishStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub properties: ContentLanguage,
}

impl ContentVersion {
    pub fn draft(version: VersionNumber, now: DateTime<Utc>) -> Self {
        Self {
            version,
            status: PublishStatus::Draft,
            created_at: now,
            updated_at: now,
            properties: BTreeMap::new(),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.status == PublishStatus::Draft
    }

    pub fn ensure_draft(&self) -> DomainResult<()> {
        if self.is_draft() {
            Ok(())
        } else {
            Err(DomainError::NotDraft(self.version))
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.properties.keys()
    }

    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.properties.contains_key(locale)
    }

    pub fn fields(&self, locale: &Locale) -> Option<&ContentFields> {
        self.properties.get(locale)
    }

    pub fn value(&self, locale: &Locale, field: &str) -> Option<&FieldValue> {
        self.properties
            .get(locale)
            .and_then(|fields| fields.get(field))
            .map(|field| &field.value)
    }

    pub fn field_by_property(
        &self,
        locale: &Locale,
        id: PropertyDefinitionId,
    ) -> Option<&ContentField> {
        self.properties
            .get(locale)
            .and_then(|fields| fields.values().find(|field| field.id == id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub content_definition_id: ContentDefinitionId,
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub parent_id: Option<ContentId>,
    #[serde(default)]
    pub published_version: Option<VersionNumber>,
    pub status: PublishStatus,
    pub versions: BTreeMap<VersionNumber, ContentVersion>,
    #[serde(default)]
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn version(&self, number: VersionNumber) -> DomainResult<&ContentVersion> {
        self.versions
            .get(&number)
            .ok_or_else(|| version_not_found(self.id, number))
    }

    pub fn version_mut(&mut self, number: VersionNumber) -> DomainResult<&mut ContentVersion> {
        let id = self.id;
        self.versions
            .get_mut(&number)
            .ok_or_else(|| version_not_found(id, number))
    }

    pub fn latest_version(&self) -> Option<&ContentVersion> {
        self.versions.values().next_back()
    }

    /// The published version when there is one, otherwise the newest.
    pub fn current_version(&self) -> Option<&ContentVersion> {
        self.published_version
            .and_then(|number| self.versions.get(&number))
            .or_else(|| self.latest_version())
    }

    pub fn next_version_number(&self) -> DomainResult<VersionNumber> {
        match self.versions.keys().next_back() {
            None => Ok(VersionNumber::FIRST),
            Some(last) => last.next().ok_or_else(|| {
                DomainError::Conflict(format!("content {} has no version numbers left", self.id))
            }),
        }
    }

    /// Versions are append-only; a number is never reused.
    pub fn append_version(&mut self, version: ContentVersion) -> DomainResult<()> {
        if self.versions.contains_key(&version.version) {
            return Err(DomainError::Conflict(format!(
                "version {} of content {} already exists",
                version.version, self.id
            )));
        }
        self.updated_at = version.created_at;
        self.versions.insert(version.version, version);
        Ok(())
    }

    pub fn is_archived(&self) -> bool {
        self.status == PublishStatus::Archived
    }
}

fn version_not_found(id: ContentId, number: VersionNumber) -> DomainError {
    DomainError::NotFound(format!("version {number} of content {id} not found"))
}
