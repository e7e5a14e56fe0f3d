use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

/// How a scheduled web fallback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// No timer was armed (web path, fallback disabled, or no surface).
    NotScheduled,
    /// The delay elapsed with the page visible; the web URL was opened.
    Navigated,
    /// The page was hidden at wake-up; the native app took over.
    PageHidden,
    /// Wake-up came too late to trust (device slept, tab throttled).
    ClockSkew,
    /// Cancelled by the caller or by a newer `open_link`.
    Cancelled,
}

/// Control over one pending web fallback.
///
/// Dropping the handle does not cancel the fallback; the check still runs.
#[derive(Debug)]
pub struct FallbackHandle {
    token: Option<Arc<AtomicBool>>,
    task: Option<JoinHandle<FallbackOutcome>>,
}

impl FallbackHandle {
    /// Handle for a call that armed no timer.
    pub fn inert() -> Self {
        Self {
            token: None,
            task: None,
        }
    }

    pub(crate) fn scheduled(token: Arc<AtomicBool>, task: JoinHandle<FallbackOutcome>) -> Self {
        Self {
            token: Some(token),
            task: Some(task),
        }
    }

    /// Suppresses the fallback if it has not fired yet. Idempotent.
    pub fn cancel(&self) {
        if let Some(token) = &self.token {
            token.store(true, Ordering::Relaxed);
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }

    /// True while the check is armed and not cancelled.
    pub fn is_pending(&self) -> bool {
        let cancelled = self
            .token
            .as_ref()
            .is_some_and(|t| t.load(Ordering::Relaxed));
        let running = self.task.as_ref().is_some_and(|t| !t.is_finished());
        running && !cancelled
    }

    /// Waits for the fallback check and reports what it did.
    pub async fn outcome(self) -> FallbackOutcome {
        let Some(task) = self.task else {
            return FallbackOutcome::NotScheduled;
        };
        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("fallback task did not complete: {}", e);
                FallbackOutcome::Cancelled
            }
        }
    }
}
