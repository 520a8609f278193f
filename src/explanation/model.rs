//! Explanation data model.
//!
//! An explanation carries a human-readable message, an inferred cause,
//! actionable suggestions, a confidence score, an error classification,
//! and the source location the analyzer attributed the failure to.
//! An empty explanation means the analyzer had nothing to say.

use serde::{Deserialize, Serialize};

/// Error classification assigned by an analyzer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Logic error in application code.
    Logic,
    /// Runtime failure (panics, arithmetic, conversions).
    Runtime,
    /// Type or contract mismatch.
    Type,
    /// Database or storage layer failure.
    Database,
    /// Network or remote-service failure.
    Network,
    /// Misconfiguration.
    Configuration,
    /// Analyzer could not classify the exception.
    Unknown,
}

impl ErrorCategory {
    /// Returns the string form used in log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Logic => "logic",
            ErrorCategory::Runtime => "runtime",
            ErrorCategory::Type => "type",
            ErrorCategory::Database => "database",
            ErrorCategory::Network => "network",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source location an analyzer attributed a failure to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceLocation {
    /// Source file path.
    pub file: String,
    /// Line number within the file.
    pub line: u32,
}

impl SourceLocation {
    /// Create from file and line.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Complete analyzer output for one exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Human-readable summary of what went wrong.
    pub message: String,
    /// Inferred root cause.
    pub cause: String,
    /// Actionable remediation suggestions, most relevant first.
    pub suggestions: Vec<String>,
    /// Analyzer confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Error classification.
    pub error_category: ErrorCategory,
    /// Attributed source location, if the analyzer found one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Explanation {
    /// An explanation carrying no information.
    ///
    /// Analyzers return this when they recognize nothing; consumers
    /// must treat it as "do not report".
    pub fn empty() -> Self {
        Self {
            message: String::new(),
            cause: String::new(),
            suggestions: Vec::new(),
            confidence: 0.0,
            error_category: ErrorCategory::Unknown,
            location: None,
        }
    }

    /// True when this explanation carries no usable content.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.cause.is_empty() && self.suggestions.is_empty()
    }

    /// Start building an explanation from its message.
    pub fn builder(message: impl Into<String>) -> ExplanationBuilder {
        ExplanationBuilder::new(message)
    }
}

/// Builder for constructing explanations.
pub struct ExplanationBuilder {
    message: String,
    cause: String,
    suggestions: Vec<String>,
    confidence: f64,
    error_category: ErrorCategory,
    location: Option<SourceLocation>,
}

impl ExplanationBuilder {
    /// Create a builder with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: String::new(),
            suggestions: Vec::new(),
            confidence: 0.0,
            error_category: ErrorCategory::Unknown,
            location: None,
        }
    }

    /// Set the inferred cause.
    pub fn cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = cause.into();
        self
    }

    /// Append a suggestion.
    pub fn suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the confidence score, clamped to [0.0, 1.0].
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set the error classification.
    pub fn category(mut self, category: ErrorCategory) -> Self {
        self.error_category = category;
        self
    }

    /// Set the attributed source location.
    pub fn location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.location = Some(SourceLocation::new(file, line));
        self
    }

    /// Build the explanation.
    pub fn build(self) -> Explanation {
        Explanation {
            message: self.message,
            cause: self.cause,
            suggestions: self.suggestions,
            confidence: self.confidence,
            error_category: self.error_category,
            location: self.location,
        }
    }
}
