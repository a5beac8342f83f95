mod get;
mod list;
mod service;
mod versions;

pub use get::GetContentQuery;
pub use list::ListContentByDefinitionQuery;
pub use service::ContentQueryService;
pub use versions::ListVersionsQuery;
