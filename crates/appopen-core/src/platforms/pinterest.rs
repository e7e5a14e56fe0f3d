//! Pinterest pins, boards and profiles.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Pinterest, &["pinterest.com"], match_url, build);

const RESERVED: [&str; 11] = [
    "_",
    "about",
    "business",
    "categories",
    "explore",
    "ideas",
    "login",
    "search",
    "settings",
    "today",
    "videos",
];

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [first, ..] if RESERVED.contains(&first.as_str()) => None,
        [user] => Some(Capture::new("user", vec![user.clone()])),
        // `/pin/ID` and `/USER/BOARD` share the app's board route.
        [a, b, ..] => Some(Capture::new("board", vec![a.clone(), b.clone()])),
        [] => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let (ios, path) = match capture.kind() {
        "user" => {
            let user = encode_component(capture.group(0)?);
            (format!("pinterest://user/{user}"), user)
        }
        "board" => {
            let path = format!(
                "{}/{}",
                encode_component(capture.group(0)?),
                encode_component(capture.group(1)?)
            );
            (format!("pinterest://board/{path}"), path)
        }
        _ => return None,
    };

    Some(DeepLinkResult::native(
        Platform::Pinterest,
        url.as_str(),
        ios,
        Intent::new(format!("pinterest.com/{path}"), "https")
            .package("com.pinterest")
            .fallback(encode_component(url.as_str()))
            .build(),
    ))
}
