//! YouTube: watch pages, shorts, live streams, embeds and `youtu.be` links.

use url::Url;

use super::{is_slug, segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::{encode_component, query_value};

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Youtube,
    &["youtube.com", "youtu.be"],
    match_url,
    build,
);

/// Path prefixes followed directly by a video id.
const VIDEO_PATHS: [&str; 3] = ["shorts", "live", "embed"];

/// Captures the video id followed by every other query parameter, already
/// encoded as `key=value`.
fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    let id = if url.host_str()? == "youtu.be" {
        match segs.as_slice() {
            [id] => id.clone(),
            _ => return None,
        }
    } else {
        match segs.as_slice() {
            [watch] if watch == "watch" => query_value(url, "v")?,
            [kind, id] if VIDEO_PATHS.contains(&kind.as_str()) => id.clone(),
            _ => return None,
        }
    };
    if !is_slug(&id) {
        return None;
    }

    let mut groups = vec![id];
    groups.extend(
        url.query_pairs()
            .filter(|(k, _)| k != "v")
            .map(|(k, v)| format!("{}={}", encode_component(&k), encode_component(&v))),
    );
    Some(Capture::new("video", groups))
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "video" {
        return None;
    }
    let (id, params) = capture.groups().split_first()?;

    let mut target = format!("watch?v={id}");
    for p in params {
        target.push('&');
        target.push_str(p);
    }

    Some(DeepLinkResult::native(
        Platform::Youtube,
        url.as_str(),
        format!("vnd.youtube://{target}"),
        Intent::new(target, "vnd.youtube")
            .package("com.google.android.youtube")
            .build(),
    ))
}
