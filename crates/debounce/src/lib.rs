//! Debouncing and rate-limiting utilities
//!
//! This crate provides:
//! - Async debounce coordination (`Debouncer`): collapse a burst of triggers
//!   into one execution of the latest action, delayed by a fixed window
//! - Fixed-action debouncing (`Debounced`): same behavior with the action
//!   bound once at construction
//! - Per-key, poll-based debouncing (`KeyedDebouncer`)
//! - Leading-edge rate gating (`Throttle`)

pub mod config;
pub mod coordinator;
pub mod debounced;
pub mod error;
pub mod keyed;
pub mod throttle;

// Re-exports
pub use config::DebounceConfig;
pub use coordinator::Debouncer;
pub use debounced::Debounced;
pub use error::Error;
pub use keyed::KeyedDebouncer;
pub use throttle::Throttle;
