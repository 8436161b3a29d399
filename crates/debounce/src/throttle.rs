//! Leading-edge rate gating
//!
//! The counterpart to debouncing: instead of waiting for quiet, the first
//! poll in a window passes and later polls are rejected until the window
//! elapses. Useful for capping how often a hot code path does real work.

use std::time::{Duration, Instant};

/// Leading-edge rate gate.
///
/// The first [`poll`](Throttle::poll) always passes; subsequent polls pass
/// only once `window` has elapsed since the last accepted poll.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Throttle {
    /// Create a gate with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Returns whether this call is accepted, arming the window if so.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Run `job` only if the gate accepts this call.
    ///
    /// Returns whether the job ran.
    pub fn run(&mut self, job: impl FnOnce()) -> bool {
        let accepted = self.poll();
        if accepted {
            job();
        }
        accepted
    }

    fn poll_at(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_always_passes() {
        let mut gate = Throttle::new(Duration::from_secs(60));
        assert!(gate.poll());
    }

    #[test]
    fn polls_inside_window_are_rejected() {
        let base = Instant::now();
        let mut gate = Throttle::new(Duration::from_millis(100));

        assert!(gate.poll_at(base));
        assert!(!gate.poll_at(base + Duration::from_millis(50)));
        assert!(!gate.poll_at(base + Duration::from_millis(99)));
        assert!(gate.poll_at(base + Duration::from_millis(100)));
    }

    #[test]
    fn window_arms_from_last_accepted_poll() {
        let base = Instant::now();
        let mut gate = Throttle::new(Duration::from_millis(100));

        assert!(gate.poll_at(base));
        // Rejected polls do not rearm the window.
        assert!(!gate.poll_at(base + Duration::from_millis(90)));
        assert!(gate.poll_at(base + Duration::from_millis(110)));
        // New window counts from t=110, not t=90.
        assert!(!gate.poll_at(base + Duration::from_millis(200)));
        assert!(gate.poll_at(base + Duration::from_millis(210)));
    }

    #[test]
    fn run_executes_only_when_accepted() {
        let mut gate = Throttle::new(Duration::from_secs(60));
        let mut runs = 0;

        assert!(gate.run(|| runs += 1));
        assert!(!gate.run(|| runs += 1));
        assert_eq!(runs, 1);
    }
}
