//! URL modeling: canonicalization and component helpers.
//!
//! Everything that touches raw URL strings before routing lives here:
//! normalization into the canonical form handlers match against, path
//! segment extraction, and the percent-encoding used when embedding captured
//! text into native URIs.

mod encode;
mod normalize;
mod path;

pub use encode::{decode_component, encode_component};
pub use normalize::normalize;
pub use path::{path_segments, query_value};
