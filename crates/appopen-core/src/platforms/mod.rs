//! Per-platform URL grammars and deep link builders.
//!
//! Each supported platform is one constant [`Handler`]: a pure `match`
//! function that recognizes the platform's content URLs and a pure `build`
//! function that turns the captured identifiers into native URIs. Handlers
//! receive URLs that have already been through [`crate::url_model::normalize`],
//! so hosts never carry `www.` / `m.` labels and paths never end in `/`.
//!
//! Handlers with a reserved-path list (site sections that look like content
//! identifiers) return no capture for them, so those URLs come back as the
//! unknown result rather than a platform-tagged result without native links.

mod capture;
mod intent;
mod result;
mod tag;

mod discord;
mod facebook;
mod github;
mod instagram;
mod jiohotstar;
mod linkedin;
mod pinterest;
mod reddit;
mod snapchat;
mod spotify;
mod substack;
mod telegram;
mod threads;
mod twitch;
mod twitter;
mod whatsapp;
mod youtube;
mod zoom;

use std::fmt;

use url::Url;

pub use capture::Capture;
pub use result::DeepLinkResult;
pub use tag::{ParsePlatformError, Platform};

pub(crate) use intent::Intent;

/// Grammar test: `Some` when the URL is recognized content for this platform.
pub type MatchFn = fn(&Url) -> Option<Capture>;

/// Link synthesis from a capture. `None` means the capture does not fit the
/// handler's grammar.
pub type BuildFn = fn(&Url, &Capture) -> Option<DeepLinkResult>;

/// One platform's URL grammar and link builder.
#[derive(Clone, Copy)]
pub struct Handler {
    pub platform: Platform,
    /// Hostnames this handler answers for. The registry keys each one by its
    /// root domain.
    pub hostnames: &'static [&'static str],
    /// Tie-break when two handlers claim the same root domain; higher wins.
    pub priority: i32,
    matcher: MatchFn,
    builder: BuildFn,
}

impl Handler {
    pub const fn new(
        platform: Platform,
        hostnames: &'static [&'static str],
        matcher: MatchFn,
        builder: BuildFn,
    ) -> Self {
        Self {
            platform,
            hostnames,
            priority: 0,
            matcher,
            builder,
        }
    }

    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Tests `url` against this platform's grammar.
    pub fn matches(&self, url: &Url) -> Option<Capture> {
        (self.matcher)(url)
    }

    /// Builds the deep link result for a capture produced by [`Self::matches`].
    ///
    /// A capture the builder cannot use degrades to a web-only result tagged
    /// with this handler's platform.
    pub fn build(&self, url: &Url, capture: &Capture) -> DeepLinkResult {
        match (self.builder)(url, capture) {
            Some(result) => result,
            None => {
                tracing::warn!(
                    platform = %self.platform,
                    kind = capture.kind(),
                    "capture does not fit handler grammar; returning web-only result"
                );
                DeepLinkResult::web_only(self.platform, url.as_str())
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("platform", &self.platform)
            .field("hostnames", &self.hostnames)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Built-in handlers in registration order.
pub const DEFAULT_HANDLERS: [Handler; 19] = [
    youtube::HANDLER,
    linkedin::HANDLER,
    instagram::HANDLER,
    discord::HANDLER,
    facebook::HANDLER,
    spotify::HANDLER,
    whatsapp::HANDLER,
    threads::HANDLER,
    github::HANDLER,
    twitch::HANDLER,
    reddit::HANDLER,
    pinterest::HANDLER,
    snapchat::HANDLER,
    substack::HANDLER,
    telegram::HANDLER,
    zoom::HANDLER,
    twitter::X_HANDLER,
    twitter::TWITTER_HANDLER,
    jiohotstar::HANDLER,
];

/// Percent-decoded, non-empty path segments of `url`.
pub(crate) fn segments(url: &Url) -> Vec<String> {
    crate::url_model::path_segments(url)
}

/// True for segments made only of `[A-Za-z0-9_-]`.
pub(crate) fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_except_unknown_has_one_default_handler() {
        for p in Platform::ALL {
            let count = DEFAULT_HANDLERS.iter().filter(|h| h.platform == p).count();
            let expected = usize::from(p != Platform::Unknown);
            assert_eq!(count, expected, "platform {p}");
        }
    }

    #[test]
    fn handlers_claim_at_least_one_hostname() {
        for h in DEFAULT_HANDLERS {
            assert!(!h.hostnames.is_empty(), "{:?}", h);
        }
    }

    #[test]
    fn build_degrades_on_foreign_capture() {
        let url = Url::parse("https://open.spotify.com/track/abc").unwrap();
        let foreign = Capture::new("channel", vec![]);
        let result = spotify::HANDLER.build(&url, &foreign);
        assert_eq!(result, DeepLinkResult::web_only(Platform::Spotify, url.as_str()));
    }

    #[test]
    fn slug_charset() {
        assert!(is_slug("abc-DEF_123"));
        assert!(!is_slug(""));
        assert!(!is_slug("a.b"));
    }
}
