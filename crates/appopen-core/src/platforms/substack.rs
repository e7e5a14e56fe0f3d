//! Substack publications and profiles.
//!
//! The app registers universal links for its web URLs, so the native target
//! on both systems is the canonical web URL itself.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Platform};

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Substack, &["substack.com"], match_url, build);

fn match_url(url: &Url) -> Option<Capture> {
    let host = url.host_str()?;
    if let Some(publication) = host.strip_suffix(".substack.com") {
        return Some(Capture::new("publication", vec![publication.to_string()]));
    }
    match segments(url).as_slice() {
        [handle, ..] if handle.len() > 1 && handle.starts_with('@') => {
            Some(Capture::new("profile", vec![handle[1..].to_string()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    match capture.kind() {
        "publication" | "profile" if capture.group(0).is_some() => {
            Some(DeepLinkResult::native(
                Platform::Substack,
                url.as_str(),
                url.as_str(),
                url.as_str(),
            ))
        }
        _ => None,
    }
}
