use std::sync::Arc;

use crate::domain::content::ContentRepository;

pub struct ContentQueryService {
    pub(super) content_repo: Arc<dyn ContentRepository>,
}

impl ContentQueryService {
    pub fn new(content_repo: Arc<dyn ContentRepository>) -> Self {
        Self { content_repo }
    }
}
