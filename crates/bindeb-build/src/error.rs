//! Error types for the build pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Build pipeline error type
#[derive(Error, Debug)]
pub enum BuildError {
    /// Package metadata was rejected
    #[error("Metadata error: {0}")]
    Metadata(#[from] bindeb_core::Error),

    /// Staging-tree filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External archiver reported failure
    #[error("Archiver failed for package {package}: {reason}")]
    ArchiverFailed { package: String, reason: String },

    /// Binary directory missing or not a directory (strict mode)
    #[error("Binary directory not found: {path}")]
    BinDirMissing { path: PathBuf },
}

/// Result type alias for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    /// Create an archiver-failed error
    pub fn archiver_failed(package: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArchiverFailed { package: package.into(), reason: reason.into() }
    }

    /// Create a missing binary-directory error
    pub fn bin_dir_missing(path: impl Into<PathBuf>) -> Self {
        Self::BinDirMissing { path: path.into() }
    }
}
