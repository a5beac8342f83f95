// src/application/commands/contents/add_language.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentFactory, ContentId, Locale, VersionNumber},
        workspace::WorkspaceId,
    },
};
use uuid::Uuid;

/// Adds a workspace language to a draft version. Localized fields are left
/// out for translators; non-localized values are mirrored.
pub struct AddContentLanguageCommand {
    pub content_id: Uuid,
    pub version: u32,
    pub language: String,
    pub workspace_id: Uuid,
}

impl ContentCommandService {
    pub async fn add_content_language(
        &self,
        command: AddContentLanguageCommand,
    ) -> ApplicationResult<ContentDto> {
        let workspace = self
            .load_workspace(WorkspaceId::new(command.workspace_id))
            .await?;
        let locale = Locale::new(&command.language)?;
        if !workspace.supports(&locale) {
            return Err(ApplicationError::validation(format!(
                "language '{locale}' is not configured for workspace {}",
                workspace.id
            )));
        }
        let include_localized = workspace.default_locale()? == &locale;

        let content_id = ContentId::new(command.content_id);
        let content = self.load_content(content_id, workspace.id).await?;
        let definition = self.load_definition(content.content_definition_id).await?;
        let number = VersionNumber::new(command.version);
        let now = self.clock.now();

        let updated = self
            .content_repo
            .update_content_data(
                content_id,
                number,
                workspace.id,
                Box::new(move |mut version| {
                    ContentFactory::add_language(
                        &mut version,
                        locale,
                        include_localized,
                        &definition,
                    )?;
                    version.updated_at = now;
                    Ok(version)
                }),
            )
            .await?;

        tracing::info!(
            content_id = %content_id,
            version = %number,
            language = %command.language,
            "content language added"
        );
        ContentDto::with_version(updated, Some(number))
    }
}
