//! Playable media formats
//!
//! Extension allow-list used when a whole directory is loaded. Matching is
//! case-insensitive on the final extension.

use crate::item::MediaKind;
use std::path::Path;

/// Audio extensions accepted in directory listings
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "aac", "flac", "wav"];

/// Video extensions accepted in directory listings
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v"];

/// Lowercased extension of `path`, if it has a UTF-8 one
fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Classify a path by its extension
pub fn media_kind(path: &Path) -> MediaKind {
    match lowercase_extension(path) {
        Some(ext) if AUDIO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Audio,
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext.as_str()) => MediaKind::Video,
        _ => MediaKind::Unknown,
    }
}

/// Check if a file has a supported media extension
pub fn is_supported_media(path: &Path) -> bool {
    media_kind(path) != MediaKind::Unknown
}
