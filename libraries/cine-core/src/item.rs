//! Playlist item type

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Broad media category, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    /// Extension outside the allow-list (single files may still be loaded)
    Unknown,
}

/// Handle to one playable resource
///
/// Immutable once created. Identity is the path; duplicates are allowed in a
/// playlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistItem {
    path: PathBuf,
}

impl PlaylistItem {
    /// Create an item for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the resource
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path component, lossily converted for display and ordering
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Media category of the resource
    pub fn kind(&self) -> MediaKind {
        crate::formats::media_kind(&self.path)
    }
}

impl From<PathBuf> for PlaylistItem {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for PlaylistItem {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl AsRef<Path> for PlaylistItem {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for PlaylistItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
