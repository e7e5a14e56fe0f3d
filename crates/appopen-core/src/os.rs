//! Runtime OS classification from a user-agent string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Ios,
    Android,
    Desktop,
}

impl Os {
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Ios => "ios",
            Os::Android => "android",
            Os::Desktop => "desktop",
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Os::Ios | Os::Android)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown OS {0:?} (expected ios, android or desktop)")]
pub struct ParseOsError(pub String);

impl FromStr for Os {
    type Err = ParseOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Os::Ios),
            "android" => Ok(Os::Android),
            "desktop" => Ok(Os::Desktop),
            _ => Err(ParseOsError(s.to_string())),
        }
    }
}

/// Classifies a user agent. No user agent (headless caller) is desktop.
pub fn detect_os(user_agent: Option<&str>) -> Os {
    let Some(ua) = user_agent else {
        return Os::Desktop;
    };
    let ua = ua.to_ascii_lowercase();
    if ["iphone", "ipad", "ipod"].iter().any(|d| ua.contains(d)) {
        Os::Ios
    } else if ua.contains("android") {
        Os::Android
    } else {
        Os::Desktop
    }
}
