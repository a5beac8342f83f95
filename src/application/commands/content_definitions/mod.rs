// src/application/commands/content_definitions/mod.rs
mod create;
mod properties;
mod service;
mod validators;

pub use create::CreateContentDefinitionCommand;
pub use properties::{
    AddPropertyDefinitionCommand, DeletePropertyDefinitionCommand,
    RenamePropertyDefinitionCommand, UpdatePropertyDefinitionCommand,
};
pub use service::ContentDefinitionCommandService;
pub use validators::UpsertValidatorCommand;
