//! Per-key debouncing
//!
//! Tracks an independent delay window per key; a key becomes ready once it
//! has stayed quiet for a full window. Poll-based: the owner drains ready
//! keys on its own cadence instead of scheduling timers, which suits event
//! loops that already tick (file watchers, input pipelines).

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Debounces events per key.
///
/// [`record`](KeyedDebouncer::record) restarts the key's window;
/// [`take_ready`](KeyedDebouncer::take_ready) drains every key whose window
/// has elapsed since its last record.
#[derive(Debug)]
pub struct KeyedDebouncer<K> {
    /// Last record time per key.
    windows: HashMap<K, Instant>,
    /// How long a key must stay quiet before it is ready.
    delay: Duration,
}

impl<K: Eq + Hash> KeyedDebouncer<K> {
    /// Create a per-key debouncer with the given delay window.
    pub fn new(delay: Duration) -> Self {
        Self {
            windows: HashMap::new(),
            delay,
        }
    }

    /// Record an event for `key`, restarting its window.
    pub fn record(&mut self, key: K) {
        self.windows.insert(key, Instant::now());
    }

    /// Discard a pending key (e.g. the underlying resource went away).
    ///
    /// Returns whether the key was pending.
    pub fn remove(&mut self, key: &K) -> bool {
        self.windows.remove(key).is_some()
    }

    /// Drain and return every key that has stayed quiet for a full window.
    pub fn take_ready(&mut self) -> Vec<K> {
        self.drain_ready_at(Instant::now())
    }

    /// Whether any key is still inside its window.
    pub fn has_pending(&self) -> bool {
        !self.windows.is_empty()
    }

    /// Number of keys still inside their windows.
    pub fn pending_count(&self) -> usize {
        self.windows.len()
    }

    fn drain_ready_at(&mut self, now: Instant) -> Vec<K> {
        let mut ready = Vec::new();
        let mut still_pending = HashMap::with_capacity(self.windows.len());

        for (key, last) in self.windows.drain() {
            if now.saturating_duration_since(last) >= self.delay {
                ready.push(key);
            } else {
                still_pending.insert(key, last);
            }
        }

        self.windows = still_pending;
        ready
    }
}
