//! Error types for the core library

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for bindeb operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed metadata input
    #[error("Invalid package metadata: {reason}")]
    Validation { reason: String },

    /// Source binary missing at metadata-construction time
    #[error("Binary not found: {path}")]
    BinaryNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for bindeb operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reason: reason.into() }
    }

    /// Create a binary-not-found error
    pub fn binary_not_found(path: impl Into<PathBuf>) -> Self {
        Self::BinaryNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
