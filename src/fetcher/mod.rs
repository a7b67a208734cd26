pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{fetch, get_client};
pub use errors::FetchError;
pub use types::PageResponse;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Seam between the preview pipeline and the network.
///
/// The production implementation is [`HttpFetcher`]; tests substitute a mock
/// so the pipeline can be exercised without sockets.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        client::fetch(url).await
    }
}
