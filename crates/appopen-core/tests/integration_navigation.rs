//! Integration test: open-with-fallback navigation against a recording host,
//! with tokio time paused so the fallback timer runs instantly.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

use appopen_core::{FallbackOutcome, NavigationHost, Navigator, OpenOptions};
use common::recording_host::{Nav, RecordingHost, ANDROID_UA, IPHONE_UA};

const VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const VIDEO_IOS: &str = "vnd.youtube://watch?v=dQw4w9WgXcQ";
const VIDEO_WEB: &str = "https://youtube.com/watch?v=dQw4w9WgXcQ";

fn navigator(ua: Option<&str>) -> (Arc<RecordingHost>, Navigator) {
    let host = Arc::new(RecordingHost::new(ua));
    let nav = Navigator::with_host(host.clone());
    (host, nav)
}

fn same(url: &str) -> Nav {
    Nav::Same(url.to_string())
}

#[tokio::test(start_paused = true)]
async fn native_first_then_web_fallback_after_delay() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());

    // Native navigation happens before open_link returns.
    assert_eq!(host.navs(), vec![same(VIDEO_IOS)]);
    assert!(handle.is_pending());

    let started = tokio::time::Instant::now();
    assert_eq!(handle.outcome().await, FallbackOutcome::Navigated);
    assert_eq!(started.elapsed(), Duration::from_millis(2500));
    assert_eq!(host.navs(), vec![same(VIDEO_IOS), same(VIDEO_WEB)]);
}

#[tokio::test(start_paused = true)]
async fn android_uses_intent_uri() {
    let (host, nav) = navigator(Some(ANDROID_UA));
    let handle = nav.open_link("https://t.me/durov", &OpenOptions::default());
    assert_eq!(
        host.navs(),
        vec![same("intent://resolve?domain=durov#Intent;scheme=tg;end")]
    );
    assert_eq!(handle.outcome().await, FallbackOutcome::Navigated);
    assert_eq!(host.navs().last(), Some(&same("https://t.me/durov")));
}

#[tokio::test(start_paused = true)]
async fn hidden_page_suppresses_fallback() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    host.set_hidden(true);
    assert_eq!(handle.outcome().await, FallbackOutcome::PageHidden);
    assert_eq!(host.navs(), vec![same(VIDEO_IOS)]);
}

#[tokio::test(start_paused = true)]
async fn briefly_hidden_page_still_suppresses_fallback() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    tokio::time::sleep(Duration::from_millis(500)).await;
    host.set_hidden(true);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    host.set_hidden(false);
    assert_eq!(handle.outcome().await, FallbackOutcome::PageHidden);
    assert_eq!(host.navs(), vec![same(VIDEO_IOS)]);
}

#[tokio::test(start_paused = true)]
async fn late_wakeup_suppresses_fallback() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    host.skew_clock(Duration::from_secs(5));
    assert_eq!(handle.outcome().await, FallbackOutcome::ClockSkew);
    assert_eq!(host.navs(), vec![same(VIDEO_IOS)]);
}

#[tokio::test(start_paused = true)]
async fn wakeup_within_tolerance_still_falls_back() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    host.skew_clock(Duration::from_millis(900));
    assert_eq!(handle.outcome().await, FallbackOutcome::Navigated);
    assert_eq!(host.navs().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cancel_suppresses_fallback() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    handle.cancel();
    assert!(!handle.is_pending());
    assert_eq!(handle.outcome().await, FallbackOutcome::Cancelled);
    assert_eq!(host.navs(), vec![same(VIDEO_IOS)]);
}

#[tokio::test(start_paused = true)]
async fn second_open_cancels_first_fallback() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let first = nav.open_link(VIDEO, &OpenOptions::default());
    tokio::time::sleep(Duration::from_millis(500)).await;
    let second = nav.open_link("https://instagram.com/kishand.ev", &OpenOptions::default());

    assert_eq!(first.outcome().await, FallbackOutcome::Cancelled);
    assert_eq!(second.outcome().await, FallbackOutcome::Navigated);
    assert_eq!(
        host.navs(),
        vec![
            same(VIDEO_IOS),
            same("instagram://user?username=kishand.ev"),
            same("https://instagram.com/kishand.ev"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn web_only_open_cancels_pending_fallback() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let first = nav.open_link(VIDEO, &OpenOptions::default());
    let second = nav.open_link("https://example.com/docs", &OpenOptions::default());
    assert!(!second.is_scheduled());
    assert_eq!(first.outcome().await, FallbackOutcome::Cancelled);
    assert_eq!(
        host.navs(),
        vec![same(VIDEO_IOS), same("https://example.com/docs")]
    );
}

#[tokio::test(start_paused = true)]
async fn navigator_cancel_pending() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    nav.cancel_pending();
    assert_eq!(handle.outcome().await, FallbackOutcome::Cancelled);
    assert_eq!(host.navs().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn fallback_opens_new_surface_when_asked() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let opts = OpenOptions {
        open_in_new_tab: true,
        fallback_delay: Duration::from_millis(800),
        ..OpenOptions::default()
    };
    let handle = nav.open_link(VIDEO, &opts);
    assert_eq!(handle.outcome().await, FallbackOutcome::Navigated);
    assert_eq!(
        host.navs(),
        vec![same(VIDEO_IOS), Nav::NewSurface(VIDEO_WEB.to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn fallback_disabled_arms_no_timer() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let opts = OpenOptions {
        fallback_to_web: false,
        ..OpenOptions::default()
    };
    let handle = nav.open_link(VIDEO, &opts);
    assert!(!handle.is_scheduled());
    assert_eq!(handle.outcome().await, FallbackOutcome::NotScheduled);
    assert_eq!(host.navs(), vec![same(VIDEO_IOS)]);
}

#[tokio::test(start_paused = true)]
async fn desktop_goes_straight_to_web() {
    let (host, nav) = navigator(Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0"));
    let handle = nav.open_link(VIDEO, &OpenOptions::default());
    assert_eq!(handle.outcome().await, FallbackOutcome::NotScheduled);
    assert_eq!(host.navs(), vec![same(VIDEO_WEB)]);
}

#[tokio::test(start_paused = true)]
async fn mobile_without_native_link_goes_to_web() {
    let (host, nav) = navigator(Some(IPHONE_UA));
    let handle = nav.open_link("https://example.com/docs/", &OpenOptions::default());
    assert!(!handle.is_scheduled());
    assert_eq!(host.navs(), vec![same("https://example.com/docs")]);
}

/// Holds the first two navigations until both callers have reached them.
struct GatedHost {
    inner: RecordingHost,
    gate: Barrier,
    entered: AtomicUsize,
}

impl NavigationHost for GatedHost {
    fn user_agent(&self) -> Option<String> {
        self.inner.user_agent()
    }

    fn navigate(&self, url: &str) {
        if self.entered.fetch_add(1, Ordering::SeqCst) < 2 {
            self.gate.wait();
        }
        self.inner.navigate(url);
    }

    fn open_new_surface(&self, url: &str) {
        self.inner.open_new_surface(url);
    }

    fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_opens_leave_exactly_one_fallback() {
    let host = Arc::new(GatedHost {
        inner: RecordingHost::new(Some(IPHONE_UA)),
        gate: Barrier::new(2),
        entered: AtomicUsize::new(0),
    });
    let nav = Arc::new(Navigator::with_host(host.clone()));
    let opts = OpenOptions {
        fallback_delay: Duration::from_millis(50),
        ..OpenOptions::default()
    };

    let calls: Vec<_> = [VIDEO, "https://t.me/durov"]
        .into_iter()
        .map(|url| {
            let nav = Arc::clone(&nav);
            let opts = opts.clone();
            tokio::task::spawn_blocking(move || nav.open_link(url, &opts))
        })
        .collect();

    let mut outcomes = Vec::new();
    for call in calls {
        let handle = call.await.unwrap();
        assert!(handle.is_scheduled());
        outcomes.push(handle.outcome().await);
    }

    let navigated = outcomes
        .iter()
        .filter(|o| **o == FallbackOutcome::Navigated)
        .count();
    let cancelled = outcomes
        .iter()
        .filter(|o| **o == FallbackOutcome::Cancelled)
        .count();
    assert_eq!((navigated, cancelled), (1, 1), "{outcomes:?}");

    let web = host
        .inner
        .navs()
        .into_iter()
        .filter(|n| matches!(n, Nav::Same(u) if u.starts_with("https://")))
        .count();
    assert_eq!(web, 1);
}
