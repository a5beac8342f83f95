pub mod content;
pub mod content_definitions;

pub use content::{ContentDto, ContentFieldDto, ContentVersionDto, VersionSummaryDto};
pub use content_definitions::{ContentDefinitionDto, PropertyDefinitionDto};
