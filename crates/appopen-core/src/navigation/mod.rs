//! Open-with-fallback navigation.
//!
//! On a mobile OS with a native link, the [`Navigator`] navigates to the
//! native URI right away and arms a timer. If the page is still visible when
//! the timer fires, the app is assumed missing and the web URL is opened
//! instead. Everywhere else the web URL is opened directly.
//!
//! The timer runs as a tokio task that samples page visibility every
//! [`VISIBILITY_POLL`] until the deadline. Cancellation is a shared abort
//! token checked at each sample; a newer `open_link` on the same navigator
//! sets the previous token.

mod handle;
mod host;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::config::AppOpenConfig;
use crate::os::{detect_os, Os};
use crate::resolver::Resolver;

pub use handle::{FallbackHandle, FallbackOutcome};
pub use host::NavigationHost;

/// Wake-ups later than `fallback_delay` plus this are treated as clock skew.
pub const SKEW_TOLERANCE: Duration = Duration::from_millis(1000);

/// How often page visibility is sampled while a fallback is pending.
pub const VISIBILITY_POLL: Duration = Duration::from_millis(100);

pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOptions {
    /// Arm the web fallback after a native navigation.
    pub fallback_to_web: bool,
    pub fallback_delay: Duration,
    /// Web navigations open a new surface instead of replacing the current one.
    pub open_in_new_tab: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            fallback_to_web: true,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            open_in_new_tab: false,
        }
    }
}

impl From<&AppOpenConfig> for OpenOptions {
    fn from(cfg: &AppOpenConfig) -> Self {
        Self {
            fallback_to_web: cfg.fallback_to_web,
            fallback_delay: Duration::from_millis(cfg.fallback_delay_ms),
            open_in_new_tab: cfg.open_in_new_tab,
        }
    }
}

/// Drives a [`NavigationHost`] from resolved deep links.
pub struct Navigator {
    host: Option<Arc<dyn NavigationHost>>,
    resolver: Resolver,
    pending: Mutex<Option<Arc<AtomicBool>>>,
}

impl Navigator {
    /// `host` is `None` for headless callers; every `open_link` is then a no-op.
    pub fn new(host: Option<Arc<dyn NavigationHost>>, resolver: Resolver) -> Self {
        Self {
            host,
            resolver,
            pending: Mutex::new(None),
        }
    }

    pub fn with_host(host: Arc<dyn NavigationHost>) -> Self {
        Self::new(Some(host), Resolver::default())
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Opens `url` natively when possible, with an optional timed web fallback.
    ///
    /// Cancels any fallback still pending from an earlier call. Must be
    /// called inside a tokio runtime for the fallback to be armed; outside
    /// one the native navigation still happens but no fallback is scheduled.
    pub fn open_link(&self, url: &str, options: &OpenOptions) -> FallbackHandle {
        let Some(host) = self.host.as_ref().filter(|h| h.has_surface()) else {
            tracing::debug!(url, "no navigation surface; ignoring open_link");
            return FallbackHandle::inert();
        };

        let os = detect_os(host.user_agent().as_deref());
        let result = self.resolver.generate_deep_link(url);
        let native = match os {
            Os::Ios => result.ios.as_deref(),
            Os::Android => result.android.as_deref(),
            Os::Desktop => None,
        };

        let Some(native) = native else {
            self.cancel_pending();
            tracing::info!(
                platform = %result.platform,
                %os,
                url = %result.web_url,
                "opening web url"
            );
            open_web(host.as_ref(), &result.web_url, options.open_in_new_tab);
            return FallbackHandle::inert();
        };

        let runtime = if options.fallback_to_web {
            match tokio::runtime::Handle::try_current() {
                Ok(rt) => Some(rt),
                Err(_) => {
                    tracing::warn!("no tokio runtime; web fallback not scheduled");
                    None
                }
            }
        } else {
            None
        };

        // The previous token is cancelled in the same critical section that
        // installs the new one, so concurrent callers leave exactly one armed.
        let token = runtime.as_ref().map(|_| Arc::new(AtomicBool::new(false)));
        self.replace_pending(token.clone());

        tracing::info!(platform = %result.platform, %os, link = native, "opening native link");
        let started = host.now();
        host.navigate(native);

        let (Some(runtime), Some(token)) = (runtime, token) else {
            return FallbackHandle::inert();
        };
        let task = runtime.spawn(fallback_check(
            Arc::clone(host),
            Arc::clone(&token),
            started,
            result.web_url,
            options.fallback_delay,
            options.open_in_new_tab,
        ));
        FallbackHandle::scheduled(token, task)
    }

    /// Cancels the fallback armed by the most recent `open_link`, if any.
    pub fn cancel_pending(&self) {
        self.replace_pending(None);
    }

    fn replace_pending(&self, next: Option<Arc<AtomicBool>>) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = std::mem::replace(&mut *pending, next) {
            old.store(true, Ordering::Relaxed);
        }
    }
}

fn open_web(host: &dyn NavigationHost, web_url: &str, new_surface: bool) {
    if new_surface {
        host.open_new_surface(web_url);
    } else {
        host.navigate(web_url);
    }
}

async fn fallback_check(
    host: Arc<dyn NavigationHost>,
    token: Arc<AtomicBool>,
    started: Instant,
    web_url: String,
    delay: Duration,
    new_surface: bool,
) -> FallbackOutcome {
    let deadline = Instant::now() + delay;

    // Visibility is sampled for the whole window; one hidden sample is enough
    // to suppress the fallback even if the page is visible again at the end.
    loop {
        if token.load(Ordering::Relaxed) {
            tracing::debug!(url = %web_url, "web fallback cancelled");
            return FallbackOutcome::Cancelled;
        }
        if host.is_hidden() {
            tracing::debug!(url = %web_url, "page hidden; native app opened");
            return FallbackOutcome::PageHidden;
        }
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        tokio::time::sleep((deadline - now).min(VISIBILITY_POLL)).await;
    }

    let elapsed = host.now().saturating_duration_since(started);
    if elapsed > delay + SKEW_TOLERANCE {
        tracing::debug!(?elapsed, "fallback woke too late; skipping");
        return FallbackOutcome::ClockSkew;
    }

    tracing::info!(url = %web_url, "native link did not open; falling back to web");
    open_web(host.as_ref(), &web_url, new_surface);
    FallbackOutcome::Navigated
}
