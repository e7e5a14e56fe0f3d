use tokio::time::Instant;

/// The environment a [`super::Navigator`] drives: a browser tab, a webview,
/// or a console stand-in.
///
/// Implementations must be cheap to call from the deferred fallback task,
/// which runs on the tokio runtime rather than the caller's thread.
pub trait NavigationHost: Send + Sync {
    /// User agent of the surface, if it reports one.
    fn user_agent(&self) -> Option<String>;

    /// False when there is nowhere to navigate (headless caller).
    fn has_surface(&self) -> bool {
        true
    }

    /// Replaces the current surface's location.
    fn navigate(&self, url: &str);

    /// Opens `url` in a new surface (tab/window).
    fn open_new_surface(&self, url: &str);

    /// Current visibility of the page. Sampled repeatedly while a fallback is
    /// pending; a single `true` sample (the native app took the foreground)
    /// suppresses the fallback.
    fn is_hidden(&self) -> bool;

    /// Monotonic clock used for the skew guard on the fallback timer.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
