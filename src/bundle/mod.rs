//! Bundle Descriptor
//!
//! Registration shim for the host's bundle discovery: exposes where this
//! component's assets and configuration live, and wires the exception
//! listener into an event dispatcher when enabled.

use std::path::Path;
use std::sync::Arc;

use crate::analyzer::ExceptionAnalyzer;
use crate::config::InsightConfig;
use crate::events::EventDispatcher;
use crate::listener::ExceptionListener;
use crate::observability::InsightLogger;

/// The runtime insight bundle.
#[derive(Debug, Clone)]
pub struct RuntimeInsightBundle {
    config: InsightConfig,
}

impl RuntimeInsightBundle {
    /// Create a bundle with the given configuration.
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Bundle name used by host discovery.
    pub fn name(&self) -> &'static str {
        "runtime-insight"
    }

    /// Install path of this component, for the host's bundle discovery.
    ///
    /// Deterministic: baked in at compile time, no side effects.
    pub fn path(&self) -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
    }

    /// The active configuration.
    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Register the exception listener with the host's dispatcher.
    ///
    /// A disabled bundle registers nothing; the host behaves as if the
    /// bundle were absent.
    pub fn register(
        &self,
        dispatcher: &mut EventDispatcher,
        analyzer: Arc<dyn ExceptionAnalyzer>,
        logger: Arc<dyn InsightLogger>,
    ) {
        if !self.config.is_enabled() {
            return;
        }
        dispatcher.register(Arc::new(ExceptionListener::new(analyzer, logger)));
    }
}

impl Default for RuntimeInsightBundle {
    fn default() -> Self {
        Self::new(InsightConfig::default())
    }
}
