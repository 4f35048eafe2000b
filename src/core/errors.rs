//! Shared error types for the metrics engine and its I/O edges

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qametrics operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed engine input: blank required fields, invalid scores
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dataset rows that cannot be decoded into records
    #[error("Dataset error at line {line}: {message}")]
    Dataset { line: u64, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure writing an output artifact
    #[error("Failed to write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV encoding errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an export error for a destination path
    pub fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            source,
        }
    }

    /// Convert a CSV decoding error into a dataset error with its line number
    pub fn dataset(err: &csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::Dataset {
            line,
            message: err.to_string(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
