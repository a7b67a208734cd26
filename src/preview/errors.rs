use thiserror::Error;

use crate::{extractor::ExtractError, fetcher::FetchError};

/// Failure classes for the preview pipeline.
///
/// All of these abort the request. Field-level "not found" is not an error
/// and never reaches this type. The HTTP boundary collapses every variant
/// into one generic response; the variants exist so logs stay precise.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The input did not parse as a URL. Detected before any fetch.
    #[error("invalid url: {0}")]
    InvalidUrl(#[source] url::ParseError),

    /// The page could not be retrieved. Forwarded without retry.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The page was retrieved but metadata extraction failed fatally.
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
}
