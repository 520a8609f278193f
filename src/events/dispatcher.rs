//! Event dispatch seam.
//!
//! A deliberately small stand-in for the host framework's dispatcher:
//! listeners declare their subscriptions as a static table, registration
//! indexes them by event kind, and dispatch fans out synchronously in
//! priority order. Listener failures cannot reach the caller because
//! `EventListener::handle` returns nothing.

use std::sync::Arc;

use super::{EventKind, ExceptionEvent, Subscription};

/// A listener the dispatcher can deliver exception events to.
pub trait EventListener: Send + Sync {
    /// Declarative subscription table: which events, at what priority.
    fn subscriptions(&self) -> &'static [Subscription];

    /// Handle one event. Must not fail; diagnostics swallow their own errors.
    fn handle(&self, event: &ExceptionEvent);
}

/// Synchronous, priority-ordered event dispatcher.
pub struct EventDispatcher {
    // (priority, registration sequence, listener) per subscription entry
    entries: Vec<(i32, usize, Arc<dyn EventListener>)>,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a listener under every subscription it declares.
    ///
    /// Lower priority runs first; equal priorities keep registration order.
    pub fn register(&mut self, listener: Arc<dyn EventListener>) {
        for subscription in listener.subscriptions() {
            if subscription.event == EventKind::KernelException {
                let sequence = self.entries.len();
                self.entries
                    .push((subscription.priority, sequence, Arc::clone(&listener)));
            }
        }
        self.entries
            .sort_by_key(|(priority, sequence, _)| (*priority, *sequence));
    }

    /// Number of registered subscription entries.
    pub fn listener_count(&self) -> usize {
        self.entries.len()
    }

    /// Deliver an event to every subscribed listener, in order.
    pub fn dispatch(&self, event: &ExceptionEvent) {
        for (_, _, listener) in &self.entries {
            listener.handle(event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CaughtException;
    use std::sync::Mutex;

    struct RecordingListener {
        name: &'static str,
        table: &'static [Subscription],
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl EventListener for RecordingListener {
        fn subscriptions(&self) -> &'static [Subscription] {
            self.table
        }

        fn handle(&self, _event: &ExceptionEvent) {
            self.seen.lock().unwrap().push(self.name);
        }
    }

    static EARLY: [Subscription; 1] = [Subscription::new(EventKind::KernelException, 0)];
    static LATE: [Subscription; 1] = [Subscription::new(EventKind::KernelException, 10)];

    #[test]
    fn test_dispatch_runs_listeners_in_priority_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.register(Arc::new(RecordingListener {
            name: "late",
            table: &LATE,
            seen: Arc::clone(&seen),
        }));
        dispatcher.register(Arc::new(RecordingListener {
            name: "early",
            table: &EARLY,
            seen: Arc::clone(&seen),
        }));

        let event = ExceptionEvent::new(CaughtException::from_parts("E", "m"));
        dispatcher.dispatch(&event);

        assert_eq!(*seen.lock().unwrap(), vec!["early", "late"]);
    }

    #[test]
    fn test_equal_priority_keeps_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        dispatcher.register(Arc::new(RecordingListener {
            name: "first",
            table: &EARLY,
            seen: Arc::clone(&seen),
        }));
        dispatcher.register(Arc::new(RecordingListener {
            name: "second",
            table: &EARLY,
            seen: Arc::clone(&seen),
        }));

        let event = ExceptionEvent::new(CaughtException::from_parts("E", "m"));
        dispatcher.dispatch(&event);

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_empty_dispatcher_dispatch_is_a_no_op() {
        let dispatcher = EventDispatcher::new();
        let event = ExceptionEvent::new(CaughtException::from_parts("E", "m"));
        dispatcher.dispatch(&event);
        assert_eq!(dispatcher.listener_count(), 0);
    }
}
