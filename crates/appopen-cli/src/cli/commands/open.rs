//! `appopen open` – run the navigator against a console host.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use appopen_core::config::AppOpenConfig;
use appopen_core::{FallbackOutcome, NavigationHost, Navigator, OpenOptions, Os, Resolver};
use tokio::time::Instant;

#[derive(Debug, Default)]
pub struct OpenArgs {
    pub os: Option<Os>,
    pub user_agent: Option<String>,
    pub no_fallback: bool,
    pub delay_ms: Option<u64>,
    pub new_tab: bool,
    pub hidden_after_ms: Option<u64>,
}

/// Prints navigations instead of performing them.
struct ConsoleHost {
    user_agent: Option<String>,
    hidden_at: Option<Instant>,
}

impl NavigationHost for ConsoleHost {
    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn navigate(&self, url: &str) {
        println!("navigate  {url}");
    }

    fn open_new_surface(&self, url: &str) {
        println!("new-tab   {url}");
    }

    fn is_hidden(&self) -> bool {
        self.hidden_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Representative user agent for `--os`. Desktop is reported as headless.
fn sample_user_agent(os: Os) -> Option<String> {
    match os {
        Os::Ios => Some(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15".into(),
        ),
        Os::Android => {
            Some("Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile".into())
        }
        Os::Desktop => None,
    }
}

fn options(cfg: &AppOpenConfig, args: &OpenArgs) -> OpenOptions {
    let mut opts = OpenOptions::from(cfg);
    if args.no_fallback {
        opts.fallback_to_web = false;
    }
    if let Some(ms) = args.delay_ms {
        opts.fallback_delay = Duration::from_millis(ms);
    }
    if args.new_tab {
        opts.open_in_new_tab = true;
    }
    opts
}

pub async fn run_open(
    resolver: Resolver,
    cfg: &AppOpenConfig,
    url: &str,
    args: OpenArgs,
) -> Result<()> {
    let user_agent = match args.os {
        Some(os) => sample_user_agent(os),
        None => args.user_agent.clone(),
    };
    let host = Arc::new(ConsoleHost {
        user_agent,
        hidden_at: args
            .hidden_after_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms)),
    });
    let navigator = Navigator::new(Some(host), resolver);

    let opts = options(cfg, &args);
    let handle = navigator.open_link(url, &opts);
    if handle.is_scheduled() {
        println!("waiting {} ms for the app...", opts.fallback_delay.as_millis());
    }

    match handle.outcome().await {
        FallbackOutcome::NotScheduled => {}
        FallbackOutcome::Navigated => println!("fallback: opened web url"),
        FallbackOutcome::PageHidden => println!("fallback: skipped, app took the foreground"),
        FallbackOutcome::ClockSkew => println!("fallback: skipped, timer woke too late"),
        FallbackOutcome::Cancelled => println!("fallback: cancelled"),
    }
    Ok(())
}
