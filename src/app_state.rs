use crate::fetcher::{HttpFetcher, PageFetcher};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher + Send + Sync>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
