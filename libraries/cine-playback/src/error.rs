//! Error types for playlist control

use cine_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Playlist controller errors
///
/// None of these are fatal: load failures leave an empty playlist and engine
/// failures leave the transport where it was.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Selected path is missing or unreadable
    #[error("Cannot access {}: {reason}", path.display())]
    NoAccessOrMissingPath { path: PathBuf, reason: String },

    /// Directory contains no supported media
    #[error("No playable media in {}", .0.display())]
    EmptyFilteredDirectory(PathBuf),

    /// Media engine could not load an item
    #[error("Failed to load media: {0}")]
    AssetLoadFailure(String),

    /// Operation needs a current item
    #[error("No current item")]
    NoCurrentItem,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ControllerError {
    /// Create an asset load failure
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoadFailure(msg.into())
    }
}

impl From<CoreError> for ControllerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoAccessOrMissingPath { path, reason } => {
                Self::NoAccessOrMissingPath { path, reason }
            }
            CoreError::NotADirectory(path) => Self::NoAccessOrMissingPath {
                path,
                reason: "not a directory".to_string(),
            },
        }
    }
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;
