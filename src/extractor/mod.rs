pub mod model;
pub mod sources;

#[cfg(test)]
mod tests;

pub use model::PageMetadata;

use scraper::Html;
use thiserror::Error;

use crate::urls::{self, BaseOrigin};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("image url resolution failed: {0}")]
    ImageUrl(#[from] url::ParseError),
}

/// Run the fallback chains over a page and produce its preview metadata.
///
/// Parsing is tolerant: malformed HTML never fails, it just yields absent
/// fields. The one fatal path is an image candidate that cannot be resolved
/// against the base origin.
pub fn extract(html: &str, base: &BaseOrigin) -> Result<PageMetadata, ExtractError> {
    let document = Html::parse_document(html);

    let title = sources::first_non_empty(&document, sources::TITLE_CHAIN);
    let description = sources::first_non_empty(&document, sources::DESCRIPTION_CHAIN);

    // An absent image short-circuits resolution
    let image = match sources::first_non_empty(&document, sources::IMAGE_CHAIN) {
        Some(candidate) => Some(urls::resolve(&candidate, base)?),
        None => None,
    };

    Ok(PageMetadata {
        title,
        description,
        image,
    })
}
