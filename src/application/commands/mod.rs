pub mod content_definitions;
pub mod contents;
