pub mod entity;
pub mod factory;
pub mod repository;
pub mod value_objects;

pub use entity::{ContentDefinition, NAME_FIELD, PropertyDefinition};
pub use factory::{ContentDefinitionFactory, PropertyDefinitionPatch};
pub use repository::{ContentDefinitionMutation, ContentDefinitionRepository};
pub use value_objects::{
    ContentDefinitionId, DefinitionName, FieldName, PropertyDefinitionId, PropertyType,
};
