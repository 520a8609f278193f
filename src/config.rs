//! Insight Configuration
//!
//! The bundle must be fully removable: disabled means no listener is
//! registered, no behavior changes in the host, nothing else to clean up.

use crate::observability::Severity;

/// Configuration for the runtime insight bundle.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Whether the bundle registers its listener.
    pub enabled: bool,
    /// Minimum severity the bundled stdout sink emits.
    pub min_severity: Severity,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            enabled: false, // Opt-in: diagnostics are off unless asked for
            min_severity: Severity::Debug,
        }
    }
}

impl InsightConfig {
    /// Config with the bundle enabled.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Config with the bundle disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Check whether the bundle is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
