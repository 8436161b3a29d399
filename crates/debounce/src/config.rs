//! Debounce configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serializable debounce settings.
///
/// Kept in milliseconds so the struct can round-trip through config files
/// without a custom `Duration` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Delay window in milliseconds (default: 300)
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

impl DebounceConfig {
    /// The delay window as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
