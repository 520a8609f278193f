//! Analyzer error types.

use thiserror::Error;

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Analyzer errors.
///
/// All variants are recoverable from the caller's point of view: a failed
/// analysis degrades to "no explanation".
#[derive(Debug, Clone, Error)]
pub enum AnalyzerError {
    /// The analyzer does not understand this exception shape.
    #[error("unsupported exception type: {0}")]
    UnsupportedException(String),

    /// An analysis rule or pattern failed while evaluating.
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),

    /// The analyzer backend was unavailable.
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),
}
