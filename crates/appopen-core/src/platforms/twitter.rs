//! X (formerly Twitter) profiles and posts.
//!
//! `x.com` and `twitter.com` share one grammar and one Android package but
//! keep separate tags and iOS schemes.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const X_HANDLER: Handler = Handler::new(Platform::X, &["x.com"], match_url, build_x);

pub(super) const TWITTER_HANDLER: Handler = Handler::new(
    Platform::Twitter,
    &["twitter.com", "mobile.twitter.com"],
    match_url,
    build_twitter,
);

const PACKAGE: &str = "com.twitter.android";

const RESERVED: [&str; 15] = [
    "compose",
    "explore",
    "hashtag",
    "home",
    "i",
    "intent",
    "login",
    "messages",
    "notifications",
    "privacy",
    "search",
    "settings",
    "share",
    "signup",
    "tos",
];

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [user, ..] if RESERVED.contains(&user.as_str()) => None,
        [_, status, id, ..]
            if status == "status" && !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) =>
        {
            Some(Capture::new("status", vec![id.clone()]))
        }
        [user, ..] => Some(Capture::new("profile", vec![user.clone()])),
        [] => None,
    }
}

fn build_x(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    build_with(Platform::X, "x", url, capture)
}

fn build_twitter(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    build_with(Platform::Twitter, "twitter", url, capture)
}

fn build_with(
    platform: Platform,
    scheme: &str,
    url: &Url,
    capture: &Capture,
) -> Option<DeepLinkResult> {
    let target = match capture.kind() {
        "profile" => format!("user?screen_name={}", encode_component(capture.group(0)?)),
        "status" => format!("status?id={}", encode_component(capture.group(0)?)),
        _ => return None,
    };

    Some(DeepLinkResult::native(
        platform,
        url.as_str(),
        format!("{scheme}://{target}"),
        Intent::new(target, scheme).package(PACKAGE).build(),
    ))
}
