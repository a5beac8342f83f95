pub mod entity;
pub mod factory;
pub mod publish;
pub mod repository;
pub mod value_objects;

pub use entity::{Content, ContentField, ContentFields, ContentLanguage, ContentVersion, FieldValue};
pub use factory::ContentFactory;
pub use publish::{ArchivePolicy, PublishGate, PublishOutcome, PublishPolicy};
pub use repository::{ContentMutation, ContentRepository, VersionMutation, VersionSummary};
pub use value_objects::{ContentId, Locale, PublishStatus, VersionNumber};
