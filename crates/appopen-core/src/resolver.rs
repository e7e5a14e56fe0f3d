//! Resolution engine: raw URL → [`DeepLinkResult`].
//!
//! normalize → route by root domain → handler grammar → handler builder,
//! with the unknown (web-only) result whenever a step comes up empty. No
//! input makes resolution fail.

use std::sync::Arc;

use url::Url;

use crate::platforms::DeepLinkResult;
use crate::routing::{default_registry, HandlerRegistry};
use crate::url_model::normalize;

/// Resolves URLs against one handler registry.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Arc<HandlerRegistry>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl Resolver {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Resolves `raw` into native and web targets. Total: unmatched or
    /// malformed input yields the unknown result for the normalized URL.
    pub fn generate_deep_link(&self, raw: &str) -> DeepLinkResult {
        let normalized = normalize(raw);

        let url = match Url::parse(&normalized) {
            Ok(u) => u,
            Err(_) => return DeepLinkResult::unknown(normalized),
        };
        let Some(hostname) = url.host_str().filter(|h| !h.is_empty()) else {
            return DeepLinkResult::unknown(normalized);
        };
        let Some(handler) = self.registry.route(hostname) else {
            tracing::debug!(hostname, "no handler for host");
            return DeepLinkResult::unknown(normalized);
        };
        match handler.matches(&url) {
            Some(capture) => {
                tracing::debug!(
                    platform = %handler.platform,
                    kind = capture.kind(),
                    "matched"
                );
                handler.build(&url, &capture)
            }
            None => {
                tracing::debug!(platform = %handler.platform, url = %normalized, "grammar mismatch");
                DeepLinkResult::unknown(normalized)
            }
        }
    }
}

/// Resolves `raw` with the process-wide default registry.
pub fn generate_deep_link(raw: &str) -> DeepLinkResult {
    Resolver::default().generate_deep_link(raw)
}
