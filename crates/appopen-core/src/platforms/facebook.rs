//! Facebook pages and profiles, opened through the app's web view modal.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::{encode_component, query_value};

pub(super) const HANDLER: Handler = Handler::new(
    Platform::Facebook,
    &["facebook.com", "fb.com"],
    match_url,
    build,
);

const RESERVED: [&str; 13] = [
    "login",
    "login.php",
    "settings",
    "help",
    "policies",
    "privacy",
    "recover",
    "checkpoint",
    "dialog",
    "sharer",
    "sharer.php",
    "plugins",
    "legal",
];

fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    match segs.as_slice() {
        [] => None,
        [first, ..] if RESERVED.contains(&first.as_str()) => None,
        [profile] if profile == "profile.php" => {
            let id = query_value(url, "id")?;
            Some(Capture::new("profile_id", vec![id]))
        }
        _ => Some(Capture::new("page", segs.clone())),
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let path = match capture.kind() {
        "page" if !capture.groups().is_empty() => capture
            .groups()
            .iter()
            .map(|g| encode_component(g))
            .collect::<Vec<_>>()
            .join("/"),
        "profile_id" => format!("profile.php?id={}", encode_component(capture.group(0)?)),
        _ => return None,
    };

    Some(DeepLinkResult::native(
        Platform::Facebook,
        url.as_str(),
        format!("fb://facewebmodal/f?href=facebook.com/{path}"),
        Intent::new(format!("facebook.com/{path}"), "https")
            .package("com.facebook.katana")
            .build(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(s: &str) -> Option<DeepLinkResult> {
        let url = Url::parse(s).unwrap();
        build(&url, &match_url(&url)?)
    }

    #[test]
    fn page() {
        let r = resolve("https://facebook.com/Google").unwrap();
        assert_eq!(
            r.ios.as_deref(),
            Some("fb://facewebmodal/f?href=facebook.com/Google")
        );
        assert_eq!(
            r.android.as_deref(),
            Some("intent://facebook.com/Google#Intent;scheme=https;package=com.facebook.katana;end")
        );
    }

    #[test]
    fn numeric_profile() {
        let r = resolve("https://facebook.com/profile.php?id=1000123").unwrap();
        assert_eq!(
            r.ios.as_deref(),
            Some("fb://facewebmodal/f?href=facebook.com/profile.php?id=1000123")
        );
        assert!(resolve("https://facebook.com/profile.php").is_none());
    }

    #[test]
    fn system_pages_rejected() {
        assert!(resolve("https://facebook.com/login").is_none());
        assert!(resolve("https://facebook.com/settings/privacy").is_none());
        assert!(resolve("https://facebook.com/").is_none());
    }
}
