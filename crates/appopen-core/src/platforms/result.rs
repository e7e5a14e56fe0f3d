//! Resolution output.

use serde::{Deserialize, Serialize};

use super::Platform;

/// Native and web targets for one resolved URL.
///
/// `ios` / `android` are `None` when no handler matched, or when the matched
/// platform has no native target for this content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkResult {
    pub web_url: String,
    pub ios: Option<String>,
    pub android: Option<String>,
    pub platform: Platform,
}

impl DeepLinkResult {
    pub fn native(
        platform: Platform,
        web_url: impl Into<String>,
        ios: impl Into<String>,
        android: impl Into<String>,
    ) -> Self {
        Self {
            web_url: web_url.into(),
            ios: Some(ios.into()),
            android: Some(android.into()),
            platform,
        }
    }

    /// Result for a recognized platform without a native target.
    pub fn web_only(platform: Platform, web_url: impl Into<String>) -> Self {
        Self {
            web_url: web_url.into(),
            ios: None,
            android: None,
            platform,
        }
    }

    /// Result when no handler claimed the URL.
    pub fn unknown(web_url: impl Into<String>) -> Self {
        Self::web_only(Platform::Unknown, web_url)
    }

    pub fn is_unknown(&self) -> bool {
        self.platform == Platform::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_and_nulls() {
        let r = DeepLinkResult::unknown("https://example.com/");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["webUrl"], "https://example.com/");
        assert!(json["ios"].is_null());
        assert!(json["android"].is_null());
        assert_eq!(json["platform"], "unknown");
    }

    #[test]
    fn native_sets_both_targets() {
        let r = DeepLinkResult::native(Platform::Spotify, "w", "i", "a");
        assert_eq!(r.ios.as_deref(), Some("i"));
        assert_eq!(r.android.as_deref(), Some("a"));
        assert!(!r.is_unknown());
    }
}
