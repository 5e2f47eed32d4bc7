//! One-shot page fetch with charset detection.
//!
//! Japanese event sites still serve Shift_JIS and EUC-JP pages, often with
//! the charset declared only in a `<meta>` tag, so the body is fetched as
//! raw bytes and decoded here rather than trusting `reqwest`'s header-only
//! default. Detection order: byte order mark, `Content-Type` charset
//! parameter, `<meta>` sniff of the first 1024 bytes, UTF-8 fallback.

use crate::error::MatchError;
use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

/// Matches `charset=shift_jis` style declarations in `Content-Type` values
/// and in `<meta charset=...>` / `http-equiv` head markup.
static CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([a-zA-Z0-9._\-]+)"#).unwrap());

/// Fetch a circle list page and decode it to text.
///
/// Exactly one request, no retries; transport failures surface as
/// [`MatchError::Fetch`].
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_page(url: &str) -> Result<String, MatchError> {
    let response = reqwest::get(url).await?;
    let header_charset = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_label);
    let bytes = response.bytes().await?;

    let encoding = detect_encoding(&bytes, header_charset.as_deref());
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(encoding = encoding.name(), "Replacement characters while decoding page");
    }
    info!(
        bytes = bytes.len(),
        encoding = encoding.name(),
        "Fetched circle list page"
    );
    Ok(text.into_owned())
}

/// Pick the encoding for a page body.
///
/// `header_charset` is the charset parameter from the `Content-Type`
/// header, if the server sent one.
pub fn detect_encoding(bytes: &[u8], header_charset: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if let Some(encoding) = header_charset.and_then(|label| Encoding::for_label(label.as_bytes())) {
        return encoding;
    }
    if let Some(encoding) = sniff_meta_charset(bytes) {
        return encoding;
    }
    debug!("No charset declaration found; assuming UTF-8");
    UTF_8
}

/// Extract the charset parameter from a `Content-Type` header value.
fn charset_label(content_type: &str) -> Option<String> {
    CHARSET_RE
        .captures(content_type)
        .map(|caps| caps[1].to_string())
}

/// Scan the head of the document for a `<meta>` charset declaration.
fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head);
    CHARSET_RE
        .captures(&head)
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()))
}
