pub mod content;
pub mod content_definition;
pub mod errors;
pub mod validation;
pub mod workspace;

pub use errors::{DomainError, DomainResult};
