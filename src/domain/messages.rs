//! Located diagnostics raised while a tool runs.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::domain::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Render one diagnostic line.
pub fn format_message(location: Option<&Location>, severity: Severity, message: &str) -> String {
    match location {
        Some(location) => format!("{location}: lobster {severity}: {message}"),
        None => format!("lobster {severity}: {message}"),
    }
}

/// Emits diagnostics as they are raised and keeps count of them.
///
/// Shared by reference between worker threads.
#[derive(Debug, Default)]
pub struct MessageHandler {
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

impl MessageHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warning(&self, location: &Location, message: impl AsRef<str>) {
        self.emit(Some(location), Severity::Warning, message.as_ref());
        self.warnings.fetch_add(1, Ordering::Relaxed);
    }

    /// Report an error and carry on.
    pub fn error(&self, location: &Location, message: impl AsRef<str>) {
        self.emit(Some(location), Severity::Error, message.as_ref());
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Report an error and hand back an `AppError` for the caller to propagate.
    pub fn fatal(&self, location: &Location, message: impl Into<String>) -> AppError {
        let message = message.into();
        self.error(location, &message);
        AppError::Fatal { location: location.clone(), message }
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn emit(&self, location: Option<&Location>, severity: Severity, message: &str) {
        eprintln!("{}", format_message(location, severity, message));
    }
}
