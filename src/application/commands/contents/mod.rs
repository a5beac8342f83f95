// src/application/commands/contents/mod.rs
mod add_language;
mod archive;
mod create;
mod new_version;
mod publish;
mod service;
mod update_fields;

pub use add_language::AddContentLanguageCommand;
pub use archive::ArchiveContentCommand;
pub use create::CreateContentCommand;
pub use new_version::CreateContentVersionCommand;
pub use publish::PublishContentCommand;
pub use service::ContentCommandService;
pub use update_fields::UpdateContentFieldsCommand;
