//! Spotify catalogue items on `open.spotify.com`.

use url::Url;

use super::{is_slug, segments, Capture, DeepLinkResult, Handler, Intent, Platform};

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Spotify,
    &["open.spotify.com", "play.spotify.com", "spotify.com"],
    match_url,
    build,
);

const CONTENT_TYPES: [&str; 7] = [
    "track",
    "artist",
    "album",
    "playlist",
    "show",
    "episode",
    "audiobook",
];

fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    // Localized links carry a leading `intl-xx` segment.
    let rest = match segs.split_first() {
        Some((first, rest)) if first.starts_with("intl-") => rest,
        _ => segs.as_slice(),
    };
    match rest {
        [kind, id, ..] if CONTENT_TYPES.contains(&kind.as_str()) && is_slug(id) => {
            Some(Capture::new("content", vec![kind.clone(), id.clone()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "content" {
        return None;
    }
    let kind = capture.group(0)?;
    let id = capture.group(1)?;

    Some(DeepLinkResult::native(
        Platform::Spotify,
        url.as_str(),
        format!("spotify:{kind}:{id}"),
        Intent::new(format!("{kind}/{id}"), "spotify")
            .package("com.spotify.music")
            .build(),
    ))
}
