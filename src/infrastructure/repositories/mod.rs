// src/infrastructure/repositories/mod.rs
mod error;
mod memory_content;
mod memory_content_definition;
mod memory_store;
mod memory_workspace;
mod postgres_content;
mod postgres_content_definition;
mod postgres_workspace;

pub use error::{map_sqlx, revision_from_db, revision_to_db};
pub use memory_content::InMemoryContentRepository;
pub use memory_content_definition::InMemoryContentDefinitionRepository;
pub use memory_store::{DocumentStore, Revisioned};
pub use memory_workspace::InMemoryWorkspaceRepository;
pub use postgres_content::PostgresContentRepository;
pub use postgres_content_definition::PostgresContentDefinitionRepository;
pub use postgres_workspace::PostgresWorkspaceRepository;
