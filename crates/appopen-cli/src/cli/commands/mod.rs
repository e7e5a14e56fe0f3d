//! CLI command handlers, one file per command.

mod detect_os;
mod normalize;
mod open;
mod platforms;
mod resolve;
mod root_domain;

pub use detect_os::run_detect_os;
pub use normalize::run_normalize;
pub use open::{run_open, OpenArgs};
pub use platforms::run_platforms;
pub use resolve::run_resolve;
pub use root_domain::run_root_domain;
