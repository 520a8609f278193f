//! Exception Events
//!
//! Typed events delivered to listeners when the host's request handling
//! raises an exception, plus the declarative subscription table and a
//! minimal synchronous dispatcher.
//!
//! Events are explicit and typed. Dispatch is inline on the host's
//! request path: no spawning, no buffering, no shared mutable state.

mod dispatcher;

pub use dispatcher::{EventDispatcher, EventListener};

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Event kinds listeners can subscribe to.
///
/// A single kind exists today; the registration table keeps the mapping
/// explicit so the host's dispatch mechanism stays decoupled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An unhandled exception occurred during request processing.
    KernelException,
}

impl EventKind {
    /// Returns the event kind identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::KernelException => "KERNEL_EXCEPTION",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A subscription entry: which event a listener wants, at what priority.
///
/// Lower priority runs earlier. Equal priorities run in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    /// Event kind of interest.
    pub event: EventKind,
    /// Dispatch priority. Lower runs first.
    pub priority: i32,
}

impl Subscription {
    /// Create a subscription for the given event kind and priority.
    pub const fn new(event: EventKind, priority: i32) -> Self {
        Self { event, priority }
    }
}

/// An exception captured by the host, stripped to what diagnostics need.
///
/// Rust has no throwable to carry around; the host captures the runtime
/// type name and display message at the raise site and hands them over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtException {
    /// Runtime type name of the error value.
    pub type_name: String,
    /// Display message of the error value.
    pub message: String,
    /// Source file where the exception surfaced, if known.
    pub file: Option<String>,
    /// Source line where the exception surfaced, if known.
    pub line: Option<u32>,
}

impl CaughtException {
    /// Capture from a live error value.
    ///
    /// The type name is taken from the concrete type, so callers must
    /// invoke this before erasing to `dyn Error`.
    pub fn capture<E: std::error::Error>(error: &E) -> Self {
        Self {
            type_name: std::any::type_name::<E>().to_string(),
            message: error.to_string(),
            file: None,
            line: None,
        }
    }

    /// Build from already-extracted parts.
    pub fn from_parts(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            file: None,
            line: None,
        }
    }

    /// Attach the source location the exception surfaced at.
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

/// Event fired when an unhandled exception occurs during request processing.
#[derive(Debug, Clone)]
pub struct ExceptionEvent {
    /// Unique event id.
    pub id: Uuid,
    /// When the exception was observed.
    pub occurred_at: DateTime<Utc>,
    /// The captured exception.
    pub exception: CaughtException,
}

impl ExceptionEvent {
    /// Create an event for the given exception, stamped now.
    pub fn new(exception: CaughtException) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            exception,
        }
    }

    /// The event kind this event belongs to.
    pub fn kind(&self) -> EventKind {
        EventKind::KernelException
    }
}
