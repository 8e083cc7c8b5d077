//! Page-wide error hooks.
//!
//! A host forwards uncaught script errors and unhandled promise rejections
//! here; they are logged and never surfaced to the visitor.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// An uncaught error raised by page script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, source: impl Into<String>, line: u32, column: u32) -> Self {
        self.source = Some(source.into());
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// A rejected promise nobody handled. `reason` is whatever was rejected with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionReport {
    pub reason: JsonValue,
}

/// Log an uncaught script error.
pub fn report_script_error(report: &ErrorReport) {
    tracing::error!(
        message = %report.message,
        source = report.source.as_deref().unwrap_or("<unknown>"),
        line = report.line,
        column = report.column,
        "script error"
    );
}

/// Log an unhandled rejection.
///
/// Returns `true`: the rejection counts as handled, so the host should
/// suppress its default console output.
pub fn report_unhandled_rejection(report: &RejectionReport) -> bool {
    tracing::error!(reason = %report.reason, "unhandled promise rejection");
    true
}
