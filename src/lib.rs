//! runtime-insight - Exception insight integration for request pipelines
//!
//! Wires an external exception-analysis capability into a host service's
//! exception-handling event pipeline. The analysis itself lives behind
//! [`analyzer::ExceptionAnalyzer`]; this crate listens for kernel exception
//! events, invokes the analyzer, and emits one structured debug record when
//! there is something to say. Diagnostics never perturb the host: every
//! failure of this crate's own is swallowed at the listener boundary.

pub mod analyzer;
pub mod bundle;
pub mod config;
pub mod events;
pub mod explanation;
pub mod listener;
pub mod observability;

pub use analyzer::{AnalyzerError, AnalyzerResult, ExceptionAnalyzer, NoOpAnalyzer};
pub use bundle::RuntimeInsightBundle;
pub use config::InsightConfig;
pub use events::{
    CaughtException, EventDispatcher, EventKind, EventListener, ExceptionEvent, Subscription,
};
pub use explanation::{ErrorCategory, Explanation, SourceLocation};
pub use listener::ExceptionListener;
pub use observability::{InsightLogger, LogContext, MemoryLogger, Severity, StdoutLogger};
