//! Analyzer Contract
//!
//! The exception-analysis capability lives outside this crate, behind
//! [`ExceptionAnalyzer`]. Implementations classify a caught exception and
//! produce an [`Explanation`](crate::explanation::Explanation); this crate
//! only invokes them. Analyzer failure is legal and is treated by callers
//! as "no explanation".

mod errors;

pub use errors::{AnalyzerError, AnalyzerResult};

use crate::events::CaughtException;
use crate::explanation::Explanation;

/// Capability mapping a caught exception to an explanation.
///
/// Implementations must be thread-safe: concurrent requests share one
/// analyzer instance.
pub trait ExceptionAnalyzer: Send + Sync {
    /// Analyze one exception.
    ///
    /// Returning an empty explanation means "nothing to report".
    fn analyze(&self, exception: &CaughtException) -> AnalyzerResult<Explanation>;
}

/// Analyzer that never has anything to say. Useful for wiring and tests.
pub struct NoOpAnalyzer;

impl ExceptionAnalyzer for NoOpAnalyzer {
    fn analyze(&self, _exception: &CaughtException) -> AnalyzerResult<Explanation> {
        Ok(Explanation::empty())
    }
}
