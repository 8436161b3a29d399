//! Trailing-edge debounce coordinator
//!
//! Collapses a burst of trigger calls into a single execution of the most
//! recently supplied action, delayed by a fixed window measured from the
//! last trigger. At most one scheduled execution is outstanding at any time.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::config::DebounceConfig;
use crate::error::Error;

/// Shared coordinator state: the one pending unit of work plus the
/// generation stamp identifying it.
#[derive(Debug)]
struct Inner {
    /// Task for the scheduled-but-not-yet-run action, if any.
    pending: Option<JoinHandle<()>>,
    /// Advanced on every trigger. A scheduled task runs its action only if
    /// its generation is still current when the timer fires; this closes
    /// the race between aborting the old task and it having already woken.
    generation: u64,
}

/// Trailing-edge debounce coordinator.
///
/// Every [`trigger`](Debouncer::trigger) cancels the previously scheduled
/// action (if it has not fired yet) and schedules the new one a full delay
/// window from now. A burst of triggers therefore runs exactly one action,
/// the last one, one window after the burst ends.
///
/// `trigger` is synchronous and may be called from any thread; the action
/// itself runs later on the coordinator's runtime. Dropping the coordinator
/// cancels any still-pending action.
#[derive(Debug)]
pub struct Debouncer {
    /// Delay window, fixed at construction.
    delay: Duration,
    /// Runtime the delayed actions are scheduled on.
    handle: Handle,
    inner: Arc<Mutex<Inner>>,
}

impl Debouncer {
    /// Create a coordinator scheduling on the ambient Tokio runtime.
    ///
    /// Fails with [`Error::NoRuntime`] when called outside a runtime
    /// context.
    pub fn new(delay: Duration) -> Result<Self, Error> {
        Ok(Self::with_handle(delay, Handle::try_current()?))
    }

    /// Create a coordinator scheduling on an explicit runtime handle.
    pub fn with_handle(delay: Duration, handle: Handle) -> Self {
        Self {
            delay,
            handle,
            inner: Arc::new(Mutex::new(Inner {
                pending: None,
                generation: 0,
            })),
        }
    }

    /// Create a coordinator from config, scheduling on the ambient runtime.
    pub fn from_config(config: &DebounceConfig) -> Result<Self, Error> {
        Self::new(config.delay())
    }

    /// The delay window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an action is currently scheduled and not yet run.
    pub fn is_pending(&self) -> bool {
        self.inner
            .lock()
            .pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Schedule `action` to run one delay window from now, canceling any
    /// previously scheduled action that has not fired yet.
    ///
    /// Only the action from the most recent trigger ever runs; actions
    /// superseded before their window elapsed are guaranteed never to run.
    pub fn trigger<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut inner = self.inner.lock();

        if let Some(prev) = inner.pending.take() {
            // No-op if the task already ran or was already canceled.
            prev.abort();
        }

        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;
        // Weak: an in-flight timer must not keep the coordinator alive.
        let state = Arc::downgrade(&self.inner);

        trace!(delay = ?self.delay, generation, "scheduling debounced action");

        inner.pending = Some(
            self.handle
                .spawn(run_after(self.delay, generation, state, action)),
        );
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // Release the pending action, and whatever it captured, promptly.
        if let Some(task) = self.inner.lock().pending.take() {
            task.abort();
        }
    }
}

/// Body of the scheduled unit of work.
async fn run_after<F>(delay: Duration, generation: u64, state: Weak<Mutex<Inner>>, action: F)
where
    F: FnOnce() + Send + 'static,
{
    tokio::time::sleep(delay).await;

    let Some(state) = state.upgrade() else {
        // Coordinator dropped while the timer was pending.
        return;
    };

    {
        let mut inner = state.lock();
        if inner.generation != generation {
            // Superseded between the timer firing and taking the lock.
            trace!(generation, current = inner.generation, "stale debounced action skipped");
            return;
        }
        inner.pending = None;
    }

    // Run outside the lock: the action may trigger this coordinator again.
    action();
}
