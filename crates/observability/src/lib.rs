//! Tracing setup and global error reporting (shared).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Global script-error and unhandled-rejection reporting.
pub mod errors;

pub use errors::{ErrorReport, RejectionReport, report_script_error, report_unhandled_rejection};
