//! Instagram posts, reels and profiles.
//!
//! Site sections in `RESERVED` are a grammar miss: they resolve to the
//! unknown result, not to an instagram-tagged result without native links.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Instagram, &["instagram.com"], match_url, build);

const PACKAGE: &str = "com.instagram.android";

const MEDIA_KINDS: [&str; 3] = ["p", "reel", "tv"];

/// Top-level segments that look like usernames but are site sections.
const RESERVED: [&str; 8] = [
    "explore",
    "accounts",
    "reels",
    "direct",
    "developer",
    "stories",
    "about",
    "legal",
];

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [kind, id, ..] if MEDIA_KINDS.contains(&kind.as_str()) => {
            Some(Capture::new("media", vec![kind.clone(), id.clone()]))
        }
        [kind, ..] if MEDIA_KINDS.contains(&kind.as_str()) => None,
        [user, ..] if !RESERVED.contains(&user.as_str()) => {
            Some(Capture::new("profile", vec![user.clone()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let target = match capture.kind() {
        "media" => format!(
            "{}/{}",
            capture.group(0)?,
            encode_component(capture.group(1)?)
        ),
        "profile" => format!("user?username={}", encode_component(capture.group(0)?)),
        _ => return None,
    };

    Some(DeepLinkResult::native(
        Platform::Instagram,
        url.as_str(),
        format!("instagram://{target}"),
        Intent::new(target, "instagram").package(PACKAGE).build(),
    ))
}
