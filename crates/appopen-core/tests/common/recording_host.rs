//! In-memory navigation host that records every navigation.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use appopen_core::NavigationHost;
use tokio::time::Instant;

pub const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
pub const ANDROID_UA: &str =
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    Same(String),
    NewSurface(String),
}

#[derive(Default)]
pub struct RecordingHost {
    user_agent: Option<String>,
    hidden: AtomicBool,
    skew_ms: AtomicU64,
    navs: Mutex<Vec<Nav>>,
}

impl RecordingHost {
    pub fn new(user_agent: Option<&str>) -> Self {
        Self {
            user_agent: user_agent.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.store(hidden, Ordering::SeqCst);
    }

    /// Pushes this host's clock ahead of tokio's, as after a device sleep.
    pub fn skew_clock(&self, by: Duration) {
        self.skew_ms.store(by.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn navs(&self) -> Vec<Nav> {
        self.navs.lock().unwrap().clone()
    }
}

impl NavigationHost for RecordingHost {
    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn navigate(&self, url: &str) {
        self.navs.lock().unwrap().push(Nav::Same(url.to_string()));
    }

    fn open_new_surface(&self, url: &str) {
        self.navs.lock().unwrap().push(Nav::NewSurface(url.to_string()));
    }

    fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::SeqCst)
    }

    fn now(&self) -> Instant {
        Instant::now() + Duration::from_millis(self.skew_ms.load(Ordering::SeqCst))
    }
}
