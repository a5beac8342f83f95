// src/application/ports/ids.rs
use uuid::Uuid;

/// Source of fresh identifiers for contents, definitions and properties.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> Uuid;
}
