//! Reddit communities and user pages.
//!
//! The app has no stable route for individual posts, so post links open the
//! community they belong to.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Reddit, &["reddit.com"], match_url, build);

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [r, sub, ..] if r == "r" => Some(Capture::new("subreddit", vec![sub.clone()])),
        [u, name, ..] if u == "u" || u == "user" => {
            Some(Capture::new("user", vec![name.clone()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let prefix = match capture.kind() {
        "subreddit" => "r",
        "user" => "u",
        _ => return None,
    };
    let target = format!("{prefix}/{}", encode_component(capture.group(0)?));

    Some(DeepLinkResult::native(
        Platform::Reddit,
        url.as_str(),
        format!("reddit://{target}"),
        Intent::new(target, "reddit")
            .package("com.reddit.android")
            .build(),
    ))
}
