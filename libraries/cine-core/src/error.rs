/// Core error types for Cine Player
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by media library collaborators
#[derive(Error, Debug)]
pub enum CoreError {
    /// Path does not exist or cannot be read
    #[error("Cannot access {}: {reason}", path.display())]
    NoAccessOrMissingPath { path: PathBuf, reason: String },

    /// A directory was expected
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl CoreError {
    /// Create an access error for `path`
    pub fn no_access(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::NoAccessOrMissingPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The path this error is about
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NoAccessOrMissingPath { path, .. } | Self::NotADirectory(path) => path,
        }
    }
}
