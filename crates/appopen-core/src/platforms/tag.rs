//! Platform tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of platforms a deep link can resolve to.
///
/// `Unknown` tags results no handler claimed; it never has a handler of its
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Linkedin,
    Instagram,
    Spotify,
    Whatsapp,
    Github,
    Discord,
    Facebook,
    Pinterest,
    Reddit,
    Snapchat,
    Substack,
    Telegram,
    Threads,
    Twitch,
    Zoom,
    X,
    Twitter,
    Jiohotstar,
    Unknown,
}

impl Platform {
    /// Every tag, in declaration order.
    pub const ALL: [Platform; 20] = [
        Platform::Youtube,
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Spotify,
        Platform::Whatsapp,
        Platform::Github,
        Platform::Discord,
        Platform::Facebook,
        Platform::Pinterest,
        Platform::Reddit,
        Platform::Snapchat,
        Platform::Substack,
        Platform::Telegram,
        Platform::Threads,
        Platform::Twitch,
        Platform::Zoom,
        Platform::X,
        Platform::Twitter,
        Platform::Jiohotstar,
        Platform::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Spotify => "spotify",
            Platform::Whatsapp => "whatsapp",
            Platform::Github => "github",
            Platform::Discord => "discord",
            Platform::Facebook => "facebook",
            Platform::Pinterest => "pinterest",
            Platform::Reddit => "reddit",
            Platform::Snapchat => "snapchat",
            Platform::Substack => "substack",
            Platform::Telegram => "telegram",
            Platform::Threads => "threads",
            Platform::Twitch => "twitch",
            Platform::Zoom => "zoom",
            Platform::X => "x",
            Platform::Twitter => "twitter",
            Platform::Jiohotstar => "jiohotstar",
            Platform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no known platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform tag: {0:?}")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| ParsePlatformError(s.to_string()))
    }
}
