pub mod dtos;
pub mod errors;
pub mod handlers;

pub use dtos::LinkPreview;
pub use errors::PreviewError;

use tracing::{instrument, warn};

use crate::{
    extractor::{self, ExtractError},
    fetcher::PageFetcher,
    urls::{self, BaseOrigin},
};

/// Compose extractor output and the domain into the final preview record.
///
/// Domain derivation failure is downgraded: the field becomes absent and the
/// request carries on.
pub fn assemble(url: &str, html: &str, base: BaseOrigin) -> Result<LinkPreview, ExtractError> {
    let metadata = extractor::extract(html, &base)?;

    let domain = match urls::parse_domain(url) {
        Ok(domain) => Some(domain),
        Err(error) => {
            warn!(%url, %error, "failed to derive domain from input url");
            None
        }
    };

    Ok(LinkPreview {
        title: metadata.title,
        description: metadata.description,
        image: metadata.image,
        domain,
        base,
        url: url.to_string(),
    })
}

/// The preview pipeline: normalize, fetch, extract, assemble.
///
/// The base origin is derived first so an invalid URL fails before any
/// network access. A fetch failure is terminal; there is no retry.
#[instrument(skip(fetcher), fields(url = %url))]
pub async fn generate_preview(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<LinkPreview, PreviewError> {
    let base = urls::parse_base(url).map_err(PreviewError::InvalidUrl)?;

    let page = fetcher.fetch(url).await?;

    let preview = assemble(url, &page.html, base)?;
    Ok(preview)
}
