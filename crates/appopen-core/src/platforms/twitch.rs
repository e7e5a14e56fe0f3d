//! Twitch channels, videos and directory pages.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Twitch, &["twitch.tv"], match_url, build);

const RESERVED: [&str; 14] = [
    "downloads",
    "drops",
    "inventory",
    "jobs",
    "login",
    "p",
    "payments",
    "prime",
    "search",
    "settings",
    "signup",
    "subscriptions",
    "turbo",
    "wallet",
];

fn match_url(url: &Url) -> Option<Capture> {
    // Clip and dashboard subdomains use unrelated route tables.
    if url.host_str()? != "twitch.tv" {
        return None;
    }
    let segs = segments(url);
    match segs.first() {
        Some(first) if !RESERVED.contains(&first.as_str()) => {
            Some(Capture::new("path", segs.clone()))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "path" || capture.groups().is_empty() {
        return None;
    }
    let path = capture
        .groups()
        .iter()
        .map(|g| encode_component(g))
        .collect::<Vec<_>>()
        .join("/");

    Some(DeepLinkResult::native(
        Platform::Twitch,
        url.as_str(),
        format!("twitch://{path}"),
        Intent::new(format!("twitch.tv/{path}"), "https")
            .package("tv.twitch.android.app")
            .fallback(encode_component(url.as_str()))
            .build(),
    ))
}
