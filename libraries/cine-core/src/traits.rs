//! Collaborator traits implemented outside the playback core

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File-system collaborator used when loading a file or folder
///
/// Permission handling (sandbox scopes, bookmarks, ...) is the implementor's
/// concern; the controller only sees paths.
pub trait MediaLibrary: Send {
    /// List playable files directly inside `dir`
    ///
    /// Implementations return the list already filtered to supported media and
    /// sorted in natural order. An empty list is not an error.
    fn list_media_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Whether `path` names a single existing file (as opposed to a directory)
    fn is_single_file(&self, path: &Path) -> bool;
}
