use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::content::{
    Content, ContentField, ContentVersion, VersionNumber, VersionSummary,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentFieldDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub property_type: String,
    pub localized: bool,
    #[schema(value_type = Object)]
    pub value: Value,
}

impl From<ContentField> for ContentFieldDto {
    fn from(field: ContentField) -> Self {
        Self {
            id: field.id.as_uuid(),
            property_type: field.property_type.to_string(),
            localized: field.localized,
            value: field.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentVersionDto {
    pub version: u32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Locale tag to field name to value.
    pub properties: BTreeMap<String, BTreeMap<String, ContentFieldDto>>,
}

impl From<ContentVersion> for ContentVersionDto {
    fn from(version: ContentVersion) -> Self {
        let properties: BTreeMap<String, BTreeMap<String, ContentFieldDto>> = version
            .properties
            .into_iter()
            .map(|(locale, fields)| {
                let fields: BTreeMap<String, ContentFieldDto> = fields
                    .into_iter()
                    .map(|(name, field)| (String::from(name), ContentFieldDto::from(field)))
                    .collect();
                (String::from(locale), fields)
            })
            .collect();

        Self {
            version: version.version.into(),
            status: version.status.to_string(),
            created_at: version.created_at,
            updated_at: version.updated_at,
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VersionSummaryDto {
    pub version: u32,
    pub status: String,
    pub languages: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VersionSummary> for VersionSummaryDto {
    fn from(summary: VersionSummary) -> Self {
        Self {
            version: summary.version.into(),
            status: summary.status.to_string(),
            languages: summary.languages.into_iter().map(Into::into).collect(),
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

/// A content item together with one selected version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: Uuid,
    pub content_definition_id: Uuid,
    pub workspace_id: Uuid,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    pub status: String,
    #[serde(default)]
    pub published_version: Option<u32>,
    pub versions: Vec<VersionSummaryDto>,
    pub version: ContentVersionDto,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentDto {
    /// Builds the view around `selected`, or around the published version
    /// (falling back to the newest) when no version is requested.
    pub fn with_version(
        content: Content,
        selected: Option<VersionNumber>,
    ) -> ApplicationResult<Self> {
        let version = match selected {
            Some(number) => content.version(number)?.clone(),
            None => content
                .current_version()
                .cloned()
                .ok_or_else(|| ApplicationError::not_found("content has no versions"))?,
        };

        Ok(Self {
            id: content.id.as_uuid(),
            content_definition_id: content.content_definition_id.as_uuid(),
            workspace_id: content.workspace_id.as_uuid(),
            parent_id: content.parent_id.map(|id| id.as_uuid()),
            status: content.status.to_string(),
            published_version: content.published_version.map(Into::into),
            versions: content
                .versions
                .values()
                .map(|version| VersionSummary::from(version).into())
                .collect(),
            version: version.into(),
            revision: content.revision,
            created_at: content.created_at,
            updated_at: content.updated_at,
        })
    }
}
