//! Directory listing for playable media

use cine_core::{is_supported_media, sort_natural, CoreError, MediaLibrary, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists playable files directly inside a directory
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Replacement allow-list (lowercase, without dot); `None` = built-in list
    extensions: Option<Vec<String>>,
}

impl FileScanner {
    /// Create a new file scanner with the built-in allow-list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Replace the extension allow-list
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = Some(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        );
        self
    }

    fn accepts(&self, path: &Path) -> bool {
        match &self.extensions {
            None => is_supported_media(path),
            Some(allowed) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
                .unwrap_or(false),
        }
    }

    /// Scan a directory (depth 1) for playable files
    ///
    /// # Returns
    ///
    /// Accepted files in natural order; empty when nothing matches.
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(CoreError::no_access(path, "path does not exist"));
        }

        if !path.is_dir() {
            return Err(CoreError::NotADirectory(path.to_path_buf()));
        }

        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_links);

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(CoreError::no_access(path, e.to_string()));
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };

            let entry_path = entry.path();
            if is_hidden(entry_path) || !entry_path.is_file() {
                continue;
            }

            if self.accepts(entry_path) {
                files.push(entry_path.to_path_buf());
            }
        }

        sort_natural(&mut files);

        tracing::debug!(
            "Found {} playable files in {}",
            files.len(),
            path.display()
        );

        Ok(files)
    }
}

impl MediaLibrary for FileScanner {
    fn list_media_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.scan_directory(dir)
    }

    fn is_single_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Check if a path names a hidden entry (dot-file)
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
