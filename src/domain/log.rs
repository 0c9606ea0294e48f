//! Progress log shown to the operator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    Info,
    Success,
    Error,
    Loading,
}

impl LogStatus {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => " OK ",
            Self::Error => "FAIL",
            Self::Loading => "....",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub status: LogStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, status: LogStatus) -> Self {
        Self {
            text: text.into(),
            status,
            data: None,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LogStatus::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LogStatus::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LogStatus::Error)
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self::new(text, LogStatus::Loading)
    }

    pub fn with_data(mut self, data: Option<Value>) -> Self {
        self.data = data;
        self
    }
}

/// Receives entries as a run produces them.
pub trait LogSink {
    fn log(&mut self, entry: LogEntry);
}

impl LogSink for Vec<LogEntry> {
    fn log(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

/// Append-only within a run; cleared when the next run starts.
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    entries: Vec<LogEntry>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LogSink for ProgressLog {
    fn log(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}
