//! Structured JSON log sinks.
//!
//! Every record is a single JSON line: `message` first, then `severity`
//! and `ts`, then the caller's context keys in sorted order. Context
//! values are arbitrary JSON, so nested maps survive intact.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use serde_json::Value;

use super::LogResult;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Finest-grained detail.
    Trace = 0,
    /// Diagnostic detail for developers.
    Debug = 1,
    /// Normal operations.
    Info = 2,
    /// Recoverable issues.
    Warn = 3,
    /// Operation failures.
    Error = 4,
}

impl Severity {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Context attached to a log record. Nested values are allowed.
pub type LogContext = serde_json::Map<String, Value>;

/// Capability for emitting structured log records.
pub trait InsightLogger: Send + Sync {
    /// Emit one record at the given severity.
    fn log(&self, severity: Severity, message: &str, context: &LogContext) -> LogResult<()>;

    /// Emit one record at debug severity.
    fn debug(&self, message: &str, context: &LogContext) -> LogResult<()> {
        self.log(Severity::Debug, message, context)
    }
}

/// Serialize one record to a single JSON line (without trailing newline).
///
/// `message` comes first, then `severity` and `ts`, then context keys in
/// sorted order. serde_json handles escaping.
pub fn format_record(
    severity: Severity,
    message: &str,
    context: &LogContext,
) -> LogResult<String> {
    let mut record = serde_json::Map::with_capacity(context.len() + 3);
    record.insert("message".to_string(), Value::from(message));
    record.insert("severity".to_string(), Value::from(severity.as_str()));
    record.insert("ts".to_string(), Value::from(Utc::now().to_rfc3339()));

    let mut keys: Vec<&String> = context.keys().collect();
    keys.sort();
    for key in keys {
        record.insert(key.clone(), context[key].clone());
    }

    Ok(serde_json::to_string(&Value::Object(record))?)
}

/// Sink that writes one line per record to stdout, synchronously.
pub struct StdoutLogger {
    min_severity: Severity,
}

impl StdoutLogger {
    /// Create a sink emitting everything at or above `min_severity`.
    pub fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}

impl InsightLogger for StdoutLogger {
    fn log(&self, severity: Severity, message: &str, context: &LogContext) -> LogResult<()> {
        if severity < self.min_severity {
            return Ok(());
        }
        let line = format_record(severity, message, context)?;
        let mut stdout = io::stdout();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Append-only file sink. Each record is written and flushed before return.
pub struct FileLogger {
    writer: Mutex<BufWriter<std::fs::File>>,
}

impl FileLogger {
    /// Open (or create) the log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl InsightLogger for FileLogger {
    fn log(&self, severity: Severity, message: &str, context: &LogContext) -> LogResult<()> {
        let line = format_record(severity, message, context)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// In-memory sink capturing records for assertions.
pub struct MemoryLogger {
    records: Mutex<Vec<(Severity, String, LogContext)>>,
}

impl MemoryLogger {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all captured records.
    pub fn records(&self) -> Vec<(Severity, String, LogContext)> {
        self.records.lock().unwrap().clone()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// True when nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightLogger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str, context: &LogContext) -> LogResult<()> {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string(), context.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context_with(key: &str, value: Value) -> LogContext {
        let mut context = LogContext::new();
        context.insert(key.to_string(), value);
        context
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_format_record_is_valid_json() {
        let line = format_record(
            Severity::Debug,
            "something happened",
            &context_with("exception", json!("DivisionByZero")),
        )
        .unwrap();

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["message"], "something happened");
        assert_eq!(parsed["severity"], "DEBUG");
        assert_eq!(parsed["exception"], "DivisionByZero");
        assert!(parsed["ts"].is_string());
    }

    #[test]
    fn test_format_record_is_one_line() {
        let line = format_record(
            Severity::Info,
            "multi\nline",
            &context_with("note", json!("line1\nline2")),
        )
        .unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_format_record_sorts_context_keys() {
        let mut context = LogContext::new();
        context.insert("zebra".to_string(), json!(1));
        context.insert("apple".to_string(), json!(2));
        context.insert("mango".to_string(), json!(3));

        let line = format_record(Severity::Info, "m", &context).unwrap();
        let apple = line.find("apple").unwrap();
        let mango = line.find("mango").unwrap();
        let zebra = line.find("zebra").unwrap();
        assert!(apple < mango);
        assert!(mango < zebra);
    }

    #[test]
    fn test_format_record_preserves_nested_context() {
        let line = format_record(
            Severity::Debug,
            "m",
            &context_with("explanation", json!({"cause": "x", "confidence": 0.5})),
        )
        .unwrap();

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["explanation"]["cause"], "x");
        assert_eq!(parsed["explanation"]["confidence"], 0.5);
    }

    #[test]
    fn test_memory_logger_captures_records() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());

        logger
            .debug("caught", &context_with("file", json!("app.rs")))
            .unwrap();

        let records = logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Severity::Debug);
        assert_eq!(records[0].1, "caught");
    }

    #[test]
    fn test_stdout_logger_filters_below_min_severity() {
        // Trace below Debug threshold: must return Ok without emitting
        let logger = StdoutLogger::new(Severity::Debug);
        let result = logger.log(Severity::Trace, "hidden", &LogContext::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_file_logger_appends_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("insight.log");

        let logger = FileLogger::open(&path).unwrap();
        logger.debug("first", &LogContext::new()).unwrap();
        logger.debug("second", &LogContext::new()).unwrap();
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: Value = serde_json::from_str(line).unwrap();
            assert_eq!(parsed["severity"], "DEBUG");
        }
    }
}
