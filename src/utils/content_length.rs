//! Content length extraction utilities.
//!
//! These work on a [`HeaderMap`] rather than a full response so they can be
//! used before the body is consumed and exercised without a server.

use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_RANGE};

/// Length the server declared for this response body.
///
/// Returns None if the "content-length" header is missing or if its value
/// is not an u64.
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
/// use resumedl::utils::declared_content_length;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("1000"));
/// assert_eq!(declared_content_length(&headers), Some(1000));
/// ```
pub fn declared_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

/// Total resource size announced by the "content-range" header, if any.
pub fn content_range_total(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_RANGE)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_content_range_total)
}

/// Parse Content-Range header to extract total size.
///
/// Content-Range header format: "bytes start-end/total" or "bytes */total".
/// An unknown total ("bytes 0-9/*") yields None.
///
/// ```rust
/// use resumedl::utils::parse_content_range_total;
///
/// assert_eq!(parse_content_range_total("bytes 0-1023/2048"), Some(2048));
/// assert_eq!(parse_content_range_total("bytes */2048"), Some(2048));
/// ```
pub fn parse_content_range_total(content_range: &str) -> Option<u64> {
    let (_, total) = content_range.split_once('/')?;
    total.trim().parse::<u64>().ok()
}
