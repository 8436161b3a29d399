//! Fixed-action debouncing
//!
//! For call sites that always fire the same closure ("save once the user
//! stops typing"), binding the action at construction keeps the call site
//! down to `debounced.call()`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::DebounceConfig;
use crate::coordinator::Debouncer;
use crate::error::Error;

/// A debounced, pre-bound action.
///
/// Thin wrapper over [`Debouncer`]: the cancel/reschedule logic lives
/// entirely in the coordinator, this type only re-supplies the same action
/// on every [`call`](Debounced::call).
pub struct Debounced {
    coordinator: Debouncer,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl Debounced {
    /// Bind `action` with the given delay window, scheduling on the ambient
    /// Tokio runtime.
    pub fn new<F>(delay: Duration, action: F) -> Result<Self, Error>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Ok(Self {
            coordinator: Debouncer::new(delay)?,
            action: Arc::new(action),
        })
    }

    /// Bind `action`, scheduling on an explicit runtime handle.
    pub fn with_handle<F>(delay: Duration, handle: Handle, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            coordinator: Debouncer::with_handle(delay, handle),
            action: Arc::new(action),
        }
    }

    /// Bind `action` with the configured delay window.
    pub fn from_config<F>(config: &DebounceConfig, action: F) -> Result<Self, Error>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(config.delay(), action)
    }

    /// Restart the delay window; the bound action runs once the window
    /// elapses without another call.
    pub fn call(&self) {
        let action = Arc::clone(&self.action);
        self.coordinator.trigger(move || action());
    }

    /// The delay window.
    pub fn delay(&self) -> Duration {
        self.coordinator.delay()
    }

    /// Whether a run of the action is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.coordinator.is_pending()
    }
}

impl fmt::Debug for Debounced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn burst_of_calls_runs_action_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let debounced = Debounced::new(Duration::from_millis(100), move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        for _ in 0..10 {
            debounced.call();
            sleep(Duration::from_millis(10)).await;
        }

        sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_each_run_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let debounced = Debounced::new(Duration::from_millis(100), move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        debounced.call();
        sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        debounced.call();
        sleep(Duration::from_millis(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_while_pending_cancels_the_run() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let debounced = Debounced::new(Duration::from_millis(100), move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        debounced.call();
        drop(debounced);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
