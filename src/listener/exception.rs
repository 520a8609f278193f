//! The exception listener itself.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::analyzer::ExceptionAnalyzer;
use crate::events::{EventKind, EventListener, ExceptionEvent, Subscription};
use crate::explanation::Explanation;
use crate::observability::{InsightLogger, LogContext};

use super::ListenerResult;

/// Message used for every emitted record.
const LOG_MESSAGE: &str = "Exception analyzed";

/// Listens for kernel exception events and logs analyzer output.
///
/// Collaborators are constructor-injected capabilities; substitute fakes
/// in tests. Stateless, synchronous, one-shot per event.
pub struct ExceptionListener {
    analyzer: Arc<dyn ExceptionAnalyzer>,
    logger: Arc<dyn InsightLogger>,
}

impl ExceptionListener {
    /// Subscription table: the single kernel exception kind, priority 0
    /// so the listener runs first among equal-priority listeners.
    pub const SUBSCRIPTIONS: [Subscription; 1] =
        [Subscription::new(EventKind::KernelException, 0)];

    /// Create a listener with the given collaborators.
    pub fn new(analyzer: Arc<dyn ExceptionAnalyzer>, logger: Arc<dyn InsightLogger>) -> Self {
        Self { analyzer, logger }
    }

    /// Fallible path: analyze, then log if the explanation says anything.
    ///
    /// Exactly one debug record per qualifying event; zero when the
    /// explanation is empty.
    fn try_handle(&self, event: &ExceptionEvent) -> ListenerResult<()> {
        let explanation = self.analyzer.analyze(&event.exception)?;
        if explanation.is_empty() {
            return Ok(());
        }

        let context = build_context(event, &explanation);
        self.logger.debug(LOG_MESSAGE, &context)?;
        Ok(())
    }
}

impl EventListener for ExceptionListener {
    fn subscriptions(&self) -> &'static [Subscription] {
        &Self::SUBSCRIPTIONS
    }

    /// Handle one event, discarding any failure of the listener's own.
    ///
    /// The host is mid-way through handling the original exception;
    /// diagnostics must not interfere with it.
    fn handle(&self, event: &ExceptionEvent) {
        let _ = self.try_handle(event);
    }
}

/// Build the fixed-key log context for one analyzed exception.
fn build_context(event: &ExceptionEvent, explanation: &Explanation) -> LogContext {
    let mut context = LogContext::new();
    context.insert(
        "exception".to_string(),
        Value::from(event.exception.type_name.as_str()),
    );
    context.insert(
        "file".to_string(),
        event
            .exception
            .file
            .as_deref()
            .map(Value::from)
            .unwrap_or(Value::Null),
    );
    context.insert(
        "line".to_string(),
        event.exception.line.map(Value::from).unwrap_or(Value::Null),
    );
    context.insert(
        "explanation".to_string(),
        json!({
            "message": explanation.message,
            "cause": explanation.cause,
            "suggestions": explanation.suggestions,
            "confidence": explanation.confidence,
            "error_type": explanation.error_category.as_str(),
            "location": explanation
                .location
                .as_ref()
                .map(|location| location.to_string()),
        }),
    );
    context
}
