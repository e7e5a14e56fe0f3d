//! Snapchat "add friend" links.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Snapchat, &["snapchat.com"], match_url, build);

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [add, user] if add == "add" => Some(Capture::new("add", vec![user.clone()])),
        [handle] if handle.len() > 1 && handle.starts_with('@') => {
            Some(Capture::new("add", vec![handle[1..].to_string()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "add" {
        return None;
    }
    let user = encode_component(capture.group(0)?);

    Some(DeepLinkResult::native(
        Platform::Snapchat,
        url.as_str(),
        format!("snapchat://add/{user}"),
        Intent::new(format!("add/{user}"), "snapchat")
            .package("com.snapchat.android")
            .fallback(encode_component(url.as_str()))
            .build(),
    ))
}
