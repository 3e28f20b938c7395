/*!
 * Explicit log handle for a translation run.
 *
 * The pipeline never configures process-wide logging. Instead the caller
 * constructs a `LogCapture` and passes it in; every record is kept for the
 * post-run issues report and forwarded to the `log` facade.
 */

use anyhow::{Context, Result};
use log::Level;
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Log entry for capturing translation process logs
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
}

/// Cloneable handle to the records of one run
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record and forward it to the `log` facade
    pub fn record(&self, level: Level, message: impl Into<String>) {
        let message = message.into();
        log::log!(level, "{}", message);
        self.entries.lock().push(LogEntry { level, message });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.record(Level::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.record(Level::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.record(Level::Error, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.record(Level::Debug, message);
    }

    /// Copy of every record so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Warnings and errors only
    pub fn issues(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level <= Level::Warn)
            .cloned()
            .collect()
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries.lock().iter().filter(|e| e.level == level).count()
    }

    /// Append warnings and errors to an issues log file under a context header.
    ///
    /// Returns `Ok(false)` when there was nothing to write.
    pub fn write_issues_to_file(&self, file_path: &Path, context: &str) -> Result<bool> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .with_context(|| format!("Failed to open log file: {:?}", file_path))?;

        writeln!(file, "=== {} ===", context)?;
        for entry in &issues {
            writeln!(file, "[{}] {}", entry.level, entry.message)?;
        }
        writeln!(file)?;

        Ok(true)
    }
}
