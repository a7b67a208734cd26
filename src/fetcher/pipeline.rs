use crate::fetcher::{errors::FetchError, types::PageResponse};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use url::Url;

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

// Charset sniffing only looks at the head of the document
const SNIFF_WINDOW: usize = 4096;

/// Turn a raw response body into a decoded [`PageResponse`].
pub fn process_response(
    url_final: Url,
    status: StatusCode,
    content_type: &str,
    body: Bytes,
) -> Result<PageResponse, FetchError> {
    let encoding = detect_encoding(content_type, &body);
    let html = decode_html(&body, encoding)?;

    Ok(PageResponse {
        url_final,
        status,
        content_type: content_type.to_string(),
        charset: encoding.name(),
        html,
        fetched_at: Utc::now(),
    })
}

/// Pick the page encoding: Content-Type header, then `<meta>` declarations
/// in the first 4KB, then chardetng's heuristic guess.
fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = encoding_from_capture(&HEADER_CHARSET_REGEX, content_type) {
        return encoding;
    }

    let window = &body[..body.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(window);

    if let Some(encoding) = encoding_from_capture(&META_CHARSET_REGEX, &head) {
        return encoding;
    }
    if let Some(encoding) = encoding_from_capture(&META_HTTP_EQUIV_REGEX, &head) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, false);
    detector.guess(None, true)
}

fn encoding_from_capture(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

fn decode_html(body: &[u8], encoding: &'static Encoding) -> Result<String, FetchError> {
    let (decoded, _encoding, had_errors) = encoding.decode(body);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}
