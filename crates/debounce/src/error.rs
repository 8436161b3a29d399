//! Library error type

use thiserror::Error;

/// Errors surfaced when constructing a coordinator.
///
/// Debouncing itself has no failure modes; once a coordinator exists,
/// triggering cannot fail. Failures inside a debounced action are the
/// caller's concern and propagate through the runtime's normal task
/// semantics.
#[derive(Debug, Error)]
pub enum Error {
    /// Constructed from ambient context while no Tokio runtime was running.
    #[error("no tokio runtime available to schedule debounced actions")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
