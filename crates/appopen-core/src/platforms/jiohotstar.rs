//! JioHotstar shows, movies, sports clips and direct play links.

use url::Url;

use super::{is_slug, segments, Capture, DeepLinkResult, Handler, Intent, Platform};

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Jiohotstar,
    &["hotstar.com", "startv.hotstar.com", "jiohotstar.com"],
    match_url,
    build,
);

const HOSTS: [&str; 3] = ["hotstar.com", "startv.hotstar.com", "jiohotstar.com"];

/// Content id for the supported route shapes:
///
/// - `[in/](shows|movies)/NAME/ID[/NAME/ID][/watch]` (the second id wins)
/// - `[in/]sports/SPORT/NAME/ID[/video/live][/watch]`
/// - `[in/]play/ID`
fn content_id(segs: &[String]) -> Option<&String> {
    let segs = match segs.split_first() {
        Some((first, rest)) if first == "in" => rest,
        _ => segs,
    };

    match segs {
        [play, id] if play == "play" => Some(id),
        [kind, rest @ ..] if kind == "shows" || kind == "movies" => {
            let rest = strip_suffix(rest, &["watch"]);
            match rest {
                [_, id] => Some(id),
                [_, _, _, id] => Some(id),
                _ => None,
            }
        }
        [sports, rest @ ..] if sports == "sports" => {
            let rest = strip_suffix(rest, &["watch"]);
            let rest = strip_suffix(rest, &["video", "live"]);
            match rest {
                [_, _, id] => Some(id),
                _ => None,
            }
        }
        _ => None,
    }
}

fn strip_suffix<'a>(segs: &'a [String], suffix: &[&str]) -> &'a [String] {
    if segs.len() >= suffix.len()
        && segs[segs.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(s, want)| s == want)
    {
        &segs[..segs.len() - suffix.len()]
    } else {
        segs
    }
}

fn match_url(url: &Url) -> Option<Capture> {
    if !HOSTS.contains(&url.host_str()?) {
        return None;
    }
    let segs = segments(url);
    if !segs.iter().all(|s| is_slug(s)) {
        return None;
    }
    let id = content_id(&segs)?;
    Some(Capture::new("content", vec![id.clone()]))
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "content" {
        return None;
    }
    let id = capture.group(0).filter(|id| is_slug(id))?;

    Some(DeepLinkResult::native(
        Platform::Jiohotstar,
        url.as_str(),
        format!("hotstar://content/{id}"),
        Intent::new(id, "hotstar")
            .package("in.startv.hotstar")
            .build(),
    ))
}
