//! Listener error types.
//!
//! These exist to make the swallow-everything contract explicit: the
//! fallible path computes a `ListenerResult` and the public entry point
//! discards it. Nothing here is ever surfaced to the host.

use thiserror::Error;

use crate::analyzer::AnalyzerError;
use crate::observability::LogError;

/// Result type for the listener's fallible path.
pub type ListenerResult<T> = Result<T, ListenerError>;

/// Failures the listener swallows at its boundary.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The injected analyzer failed.
    #[error("analyzer failed: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// The injected log sink failed.
    #[error("log emission failed: {0}")]
    Log(#[from] LogError),
}
