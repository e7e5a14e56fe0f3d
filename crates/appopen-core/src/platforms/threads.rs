//! Threads profiles.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Threads,
    &["threads.net", "threads.com"],
    match_url,
    build,
);

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [handle] if handle.len() > 1 && handle.starts_with('@') => {
            Some(Capture::new("profile", vec![handle[1..].to_string()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "profile" {
        return None;
    }
    let user = encode_component(capture.group(0)?);
    let host = url.host_str()?;

    Some(DeepLinkResult::native(
        Platform::Threads,
        url.as_str(),
        format!("barcelona://user?username={user}"),
        Intent::new(format!("{host}/@{user}"), "https")
            .package("com.instagram.barcelona")
            .build(),
    ))
}
