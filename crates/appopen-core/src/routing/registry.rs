//! Root-domain → handler map, built once and read-only afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::platforms::{Handler, Platform, DEFAULT_HANDLERS};

use super::root_domain;

/// Immutable mapping from root domain to the handler that owns it.
///
/// When two handlers claim the same root domain the one with the higher
/// `priority` keeps it; on equal priority the first registered keeps it.
/// Every such collision is logged as a warning.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    by_domain: HashMap<String, Handler>,
    handlers: Vec<Handler>,
}

impl HandlerRegistry {
    /// Builds a registry from handlers in registration order.
    pub fn register_handlers(handlers: impl IntoIterator<Item = Handler>) -> Self {
        let mut registry = Self::default();
        for handler in handlers {
            registry.insert(handler);
        }
        tracing::debug!(
            handlers = registry.handlers.len(),
            domains = registry.by_domain.len(),
            "handler registry built"
        );
        registry
    }

    fn insert(&mut self, handler: Handler) {
        for hostname in handler.hostnames {
            let key = root_domain(&hostname.to_ascii_lowercase());
            match self.by_domain.get(&key) {
                None => {
                    self.by_domain.insert(key, handler);
                }
                // Several hostnames of one handler may share a root domain.
                Some(existing) if existing.platform == handler.platform => {}
                Some(existing) => {
                    let replace = handler.priority > existing.priority;
                    let kept = if replace {
                        handler.platform
                    } else {
                        existing.platform
                    };
                    tracing::warn!(
                        domain = %key,
                        existing = %existing.platform,
                        incoming = %handler.platform,
                        kept = %kept,
                        "root domain claimed by more than one handler"
                    );
                    if replace {
                        self.by_domain.insert(key, handler);
                    }
                }
            }
        }
        self.handlers.push(handler);
    }

    /// Handler for the root domain of `hostname`, if any.
    pub fn route(&self, hostname: &str) -> Option<&Handler> {
        let key = root_domain(hostname);
        let handler = self.by_domain.get(&key);
        tracing::trace!(
            hostname,
            root = %key,
            platform = ?handler.map(|h| h.platform),
            "route"
        );
        handler
    }

    /// Handlers in registration order, including ones that lost every
    /// domain to a collision.
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Root domains owned by `platform`, sorted.
    pub fn domains_for(&self, platform: Platform) -> Vec<&str> {
        let mut domains: Vec<&str> = self
            .by_domain
            .iter()
            .filter(|(_, h)| h.platform == platform)
            .map(|(d, _)| d.as_str())
            .collect();
        domains.sort_unstable();
        domains
    }

    pub fn len(&self) -> usize {
        self.by_domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_domain.is_empty()
    }
}

/// Process-wide registry of every built-in handler.
pub fn default_registry() -> Arc<HandlerRegistry> {
    static DEFAULT: OnceLock<Arc<HandlerRegistry>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(HandlerRegistry::register_handlers(DEFAULT_HANDLERS)))
        .clone()
}
