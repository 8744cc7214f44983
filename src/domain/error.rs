use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::location::Location;
use crate::domain::schema::Schema;

/// Library-wide error type for lobster tools.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Command line misuse detected after argument parsing.
    #[error("{0}")]
    Usage(String),

    /// Config file passed via `--config` does not exist.
    #[error("Config file '{}' not found.", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file contains keys the tool does not understand.
    #[error("Unsupported config keys: {unsupported}. Supported keys are: {supported}.")]
    UnsupportedConfigKeys { unsupported: String, supported: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Tracing tag text could not be interpreted.
    #[error("Invalid tracing tag '{0}'")]
    InvalidTag(String),

    /// One or more requested inputs are neither files nor directories.
    #[error("{count} input(s) are not a file or directory")]
    InputsRejected { count: usize },

    /// Error raised through the message handler that aborts processing.
    #[error("{location}: {message}")]
    Fatal { location: Location, message: String },

    /// An item does not belong to the schema of the output being written.
    #[error("Item '{tag}' does not match output schema {expected}")]
    SchemaMismatch { tag: String, expected: Schema },

    /// Interchange serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            _ => 1,
        }
    }
}
