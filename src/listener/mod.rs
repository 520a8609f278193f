//! Exception Listener
//!
//! Observes kernel exception events and, best-effort, emits one debug log
//! record enriched with an externally computed explanation. The listener is
//! a pure side-effecting observer: nothing flows back into the host's
//! exception handling, and no failure of the listener's own may surface
//! there.

mod errors;
mod exception;

pub use errors::{ListenerError, ListenerResult};
pub use exception::ExceptionListener;
