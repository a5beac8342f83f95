use std::sync::Arc;

use crate::domain::content_definition::ContentDefinitionRepository;

pub struct ContentDefinitionQueryService {
    pub(super) repo: Arc<dyn ContentDefinitionRepository>,
}

impl ContentDefinitionQueryService {
    pub fn new(repo: Arc<dyn ContentDefinitionRepository>) -> Self {
        Self { repo }
    }
}
