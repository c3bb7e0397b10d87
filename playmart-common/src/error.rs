//! Common error types for playmart

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for playmart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the playmart crates
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing-field source record
    #[error("Parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store unreachable at startup
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Parse error for one source file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
