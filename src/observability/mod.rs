//! Observability subsystem
//!
//! Structured logging for the insight pipeline:
//! - One log line = one event, JSON encoded
//! - Synchronous, no buffering beyond a single flushed write
//! - Deterministic key ordering
//! - Log failure must never crash or perturb the host
//!
//! Sinks implement [`InsightLogger`] and are injected into consumers as
//! capabilities, never reached through globals.

mod logger;

pub use logger::{
    format_record, FileLogger, InsightLogger, LogContext, MemoryLogger, Severity, StdoutLogger,
};

use thiserror::Error;

/// Result type for log emission.
pub type LogResult<T> = Result<T, LogError>;

/// Log emission errors.
///
/// Never fatal: consumers discard these at their boundary.
#[derive(Debug, Error)]
pub enum LogError {
    /// Sink I/O failed.
    #[error("log sink write failed: {0}")]
    Sink(#[from] std::io::Error),

    /// Record could not be serialized.
    #[error("log record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
