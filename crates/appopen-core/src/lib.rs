pub mod config;
pub mod logging;

pub mod navigation;
pub mod os;
pub mod platforms;
pub mod resolver;
pub mod routing;
pub mod url_model;

pub use navigation::{FallbackHandle, FallbackOutcome, NavigationHost, Navigator, OpenOptions};
pub use os::{detect_os, Os};
pub use platforms::{DeepLinkResult, Platform};
pub use resolver::{generate_deep_link, Resolver};
pub use routing::{default_registry, root_domain, HandlerRegistry};
pub use url_model::normalize;
