//! URL normalization: base-origin derivation, domain extraction, and
//! resolution of possibly-relative references against a base origin.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use url::Url;

/// The `scheme://hostname[:port]` origin of a request URL.
///
/// Built once per request by [`parse_base`] and never mutated afterwards.
/// The port segment is present only when the URL carries an explicit port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BaseOrigin(String);

impl BaseOrigin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BaseOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the base origin from an input URL string.
///
/// This is the first validation gate for a preview request: if the input
/// does not parse as a URL, the whole request fails before any network
/// access happens.
pub fn parse_base(url: &str) -> Result<BaseOrigin, url::ParseError> {
    let parsed = Url::parse(url)?;
    let host = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;

    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };

    Ok(BaseOrigin(origin))
}

/// Extract the bare hostname from an input URL string.
///
/// Callers treat a failure here as non-fatal: the domain field becomes
/// absent rather than aborting the request.
pub fn parse_domain(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    let host = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;
    Ok(host.to_string())
}

/// Resolve a possibly-relative reference against a base origin.
///
/// References that already start with an `http` scheme pass through
/// unchanged. Everything else (relative-path, root-relative and
/// protocol-relative forms) resolves with standard URL-join rules.
pub fn resolve(candidate: &str, base: &BaseOrigin) -> Result<String, url::ParseError> {
    if candidate.starts_with("http") {
        return Ok(candidate.to_string());
    }

    let resolved = Url::parse(base.as_str())?.join(candidate)?;
    Ok(resolved.to_string())
}
