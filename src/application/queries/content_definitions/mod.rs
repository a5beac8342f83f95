mod get;
mod list;
mod service;

pub use get::GetContentDefinitionQuery;
pub use list::ListContentDefinitionsQuery;
pub use service::ContentDefinitionQueryService;
