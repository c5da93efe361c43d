//! Diagnostic queue shared by every pipeline phase.
//!
//! The queue is the explicit sink passed into the typedef database, the class
//! library and the driver. It logs each diagnostic as it is pushed and keeps
//! them in arrival order for the end-of-build summary.

use crate::{Diagnostic, ErrorCode, Severity};

/// Collected diagnostics of one build.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Error => {
                self.error_count += 1;
                tracing::error!(code = %diag.code, "{}", diag.message);
            }
            Severity::Warning => {
                self.warning_count += 1;
                tracing::warn!(code = %diag.code, "{}", diag.message);
            }
            Severity::Note => {
                tracing::info!(code = %diag.code, "{}", diag.message);
            }
        }
        self.diagnostics.push(diag);
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Number of diagnostics carrying `code`.
    pub fn count_of(&self, code: ErrorCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    /// Per-code counts, ordered by code.
    pub fn summary(&self) -> Vec<(ErrorCode, usize)> {
        ErrorCode::ALL
            .iter()
            .map(|code| (*code, self.count_of(*code)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Take all diagnostics, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
