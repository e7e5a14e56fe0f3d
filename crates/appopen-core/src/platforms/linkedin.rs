//! LinkedIn member and company pages.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Linkedin, &["linkedin.com"], match_url, build);

const PROFILE_KINDS: [&str; 2] = ["in", "company"];

fn match_url(url: &Url) -> Option<Capture> {
    match segments(url).as_slice() {
        [kind, id, ..] if PROFILE_KINDS.contains(&kind.as_str()) => {
            Some(Capture::new("profile", vec![kind.clone(), id.clone()]))
        }
        _ => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    if capture.kind() != "profile" {
        return None;
    }
    let kind = capture.group(0)?;
    let id = encode_component(capture.group(1)?);

    Some(DeepLinkResult::native(
        Platform::Linkedin,
        url.as_str(),
        format!("linkedin://{kind}/{id}"),
        Intent::new(format!("linkedin.com/{kind}/{id}"), "https")
            .package("com.linkedin.android")
            .fallback(fallback_value(url.as_str()))
            .build(),
    ))
}

/// The web URL is embedded verbatim unless it carries `#` or `;`, which would
/// end the intent's fragment or field early; then it is percent-encoded.
fn fallback_value(web_url: &str) -> String {
    if web_url.contains(['#', ';']) {
        encode_component(web_url)
    } else {
        web_url.to_string()
    }
}
