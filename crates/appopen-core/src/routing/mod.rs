//! Hostname routing.
//!
//! Every handler is keyed by the root domain of each hostname it claims, and
//! lookups collapse the incoming hostname the same way, so one map lookup
//! finds the handler for any subdomain variant.

mod domain;
mod registry;

pub use domain::root_domain;
pub use registry::{default_registry, HandlerRegistry};
