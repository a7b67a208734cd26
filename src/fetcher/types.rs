use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched, decoded HTML page.
///
/// `url_final` is the URL after redirects; `html` is the body decoded to
/// UTF-8 with the detected `charset`.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: String,
    pub charset: &'static str,
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}
