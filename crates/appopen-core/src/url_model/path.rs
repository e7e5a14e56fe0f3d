//! Path segment and query extraction from a parsed URL.

use url::Url;

use super::decode_component;

/// Returns the non-empty path segments of `url`, percent-decoded.
///
/// Handlers match against decoded text and re-encode whatever they embed, so
/// an already-escaped identifier is never escaped twice.
pub fn path_segments(url: &Url) -> Vec<String> {
    url.path()
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_component)
        .collect()
}

/// First value of query parameter `key`, decoded.
pub fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
