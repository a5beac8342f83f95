// src/application/commands/contents/update_fields.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{
        content::{ContentFactory, ContentId, VersionNumber},
        workspace::WorkspaceId,
    },
};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Writes several fields of one locale of a draft version. Either every
/// field is written or none is.
pub struct UpdateContentFieldsCommand {
    pub content_id: Uuid,
    pub version: u32,
    pub language: String,
    pub fields: Map<String, Value>,
    pub workspace_id: Uuid,
}

impl ContentCommandService {
    pub async fn update_content_fields(
        &self,
        command: UpdateContentFieldsCommand,
    ) -> ApplicationResult<ContentDto> {
        let UpdateContentFieldsCommand {
            content_id,
            version,
            language,
            fields,
            workspace_id,
        } = command;
        let content_id = ContentId::new(content_id);
        let number = VersionNumber::new(version);
        let now = self.clock.now();

        let updated = self
            .content_repo
            .update_content_data(
                content_id,
                number,
                WorkspaceId::new(workspace_id),
                Box::new(move |mut version| {
                    for (field, value) in fields {
                        tracing::debug!(
                            content_id = %content_id,
                            version = %number,
                            language = %language,
                            field = %field,
                            "writing content field"
                        );
                        ContentFactory::set_field(&mut version, &language, &field, value)?;
                    }
                    version.updated_at = now;
                    Ok(version)
                }),
            )
            .await?;

        ContentDto::with_version(updated, Some(number))
    }
}
