//! Zoom meeting join links.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::{encode_component, query_value};

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Zoom, &["zoom.us"], match_url, build);

fn is_meeting_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn match_url(url: &Url) -> Option<Capture> {
    let id = match segments(url).as_slice() {
        [j, id] if j == "j" && is_meeting_id(id) => id.clone(),
        [wc, id, join] if wc == "wc" && join == "join" && is_meeting_id(id) => id.clone(),
        _ => return None,
    };
    let mut groups = vec![id];
    groups.extend(query_value(url, "pwd").filter(|p| !p.is_empty()));
    Some(Capture::new("meeting", groups))
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "meeting" {
        return None;
    }
    let id = capture.group(0).filter(|id| is_meeting_id(id))?;
    let mut query = format!("confno={id}");
    if let Some(pwd) = capture.group(1) {
        query.push_str("&pwd=");
        query.push_str(&encode_component(pwd));
    }
    let target = format!("zoom.us/join?{query}");

    Some(DeepLinkResult::native(
        Platform::Zoom,
        url.as_str(),
        format!("zoomus://{target}"),
        Intent::new(target, "zoomus")
            .package("us.zoom.videomeetings")
            .build(),
    ))
}
