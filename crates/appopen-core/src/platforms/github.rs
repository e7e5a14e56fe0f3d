//! GitHub users, repositories and repository sub-resources.

use url::Url;

use super::{segments, Capture, DeepLinkResult, Handler, Intent, Platform};
use crate::url_model::encode_component;

pub(super) const HANDLER: Handler =
    Handler::new(Platform::Github, &["github.com"], match_url, build);

/// Sub-resource path segment → route in the app's URI.
const ROUTES: [(&str, &str); 5] = [
    ("pull", "pull"),
    ("issues", "issues"),
    ("blob", "blob"),
    ("tree", "tree"),
    ("commit", "commit"),
];

/// First segments that are site pages, not owners.
const RESERVED: [&str; 20] = [
    "about",
    "explore",
    "features",
    "issues",
    "join",
    "login",
    "logout",
    "marketplace",
    "new",
    "notifications",
    "orgs",
    "organizations",
    "pricing",
    "pulls",
    "search",
    "settings",
    "sponsors",
    "topics",
    "trending",
    "codespaces",
];

fn route_for(segment: &str) -> Option<&'static str> {
    ROUTES
        .iter()
        .find(|(seg, _)| *seg == segment)
        .map(|(_, route)| *route)
}

fn match_url(url: &Url) -> Option<Capture> {
    let segs = segments(url);
    match segs.as_slice() {
        [owner, ..] if RESERVED.contains(&owner.as_str()) => None,
        [owner] => Some(Capture::new("user", vec![owner.clone()])),
        [owner, repo, kind, rest @ ..] if !rest.is_empty() && route_for(kind).is_some() => {
            Some(Capture::new(
                "resource",
                vec![owner.clone(), repo.clone(), kind.clone(), rest.join("/")],
            ))
        }
        [owner, repo, ..] => Some(Capture::new("repo", vec![owner.clone(), repo.clone()])),
        [] => None,
    }
}

fn build(url: &Url, capture: &Capture) -> Option<DeepLinkResult> {
    let enc = |i: usize| capture.group(i).map(encode_component);
    let (ios_path, android_path) = match capture.kind() {
        "user" => {
            let owner = enc(0)?;
            (format!("user/{owner}"), owner)
        }
        "repo" => {
            let repo_path = format!("{}/{}", enc(0)?, enc(1)?);
            (format!("repo/{repo_path}"), repo_path)
        }
        "resource" => {
            let route = route_for(capture.group(2)?)?;
            let id = capture
                .group(3)?
                .split('/')
                .map(encode_component)
                .collect::<Vec<_>>()
                .join("/");
            let sub_path = format!("{}/{}/{route}/{id}", enc(0)?, enc(1)?);
            (format!("repo/{sub_path}"), sub_path)
        }
        _ => return None,
    };

    Some(DeepLinkResult::native(
        Platform::Github,
        url.as_str(),
        format!("github://{ios_path}"),
        Intent::new(format!("github.com/{android_path}"), "https")
            .package("com.github.android")
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
    fn user_profile() {
        let r = resolve("https://github.com/kishandev2509").unwrap();
        assert_eq!(r.ios.as_deref(), Some("github://user/kishandev2509"));
        assert_eq!(
            r.android.as_deref(),
            Some("intent://github.com/kishandev2509#Intent;scheme=https;package=com.github.android;end")
        );
    }

    #[test]
    fn repository_and_sub_resources() {
        let r = resolve("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(r.ios.as_deref(), Some("github://repo/rust-lang/rust"));

        let r = resolve("https://github.com/rust-lang/rust/pull/12345").unwrap();
        assert_eq!(r.ios.as_deref(), Some("github://repo/rust-lang/rust/pull/12345"));
        assert_eq!(
            r.android.as_deref(),
            Some("intent://github.com/rust-lang/rust/pull/12345#Intent;scheme=https;package=com.github.android;end")
        );

        let r = resolve("https://github.com/rust-lang/rust/blob/master/README.md").unwrap();
        assert_eq!(
            r.ios.as_deref(),
            Some("github://repo/rust-lang/rust/blob/master/README.md")
        );
    }

    #[test]
    fn unknown_sub_path_falls_back_to_repo() {
        let r = resolve("https://github.com/rust-lang/rust/actions").unwrap();
        assert_eq!(r.ios.as_deref(), Some("github://repo/rust-lang/rust"));
        let r = resolve("https://github.com/rust-lang/rust/issues").unwrap();
        assert_eq!(r.ios.as_deref(), Some("github://repo/rust-lang/rust"));
    }

    #[test]
    fn site_pages_rejected() {
        for s in [
            "https://github.com/settings/profile",
            "https://github.com/explore",
            "https://github.com/",
        ] {
            assert!(resolve(s).is_none(), "{s}");
        }
    }
}
