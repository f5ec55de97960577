//! Core types for playlist control

use cine_core::PlaylistItem;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback state as seen by the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded, or the playlist is empty
    #[default]
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-item
    Paused,
}

/// Transport status reported by the media engine itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportStatus {
    Playing,
    Paused,
    Stopped,
}

/// Tag identifying one start of one playlist item
///
/// Minted by the controller each time an item is started. Engine requests
/// carry it and engine events echo it, so results that belong to an item the
/// user has already moved away from can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MediaHandle(u64);

impl MediaHandle {
    /// Create a handle from a raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value
    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Playback position of the current item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportPosition {
    /// Seconds from the start of the item (>= 0)
    pub current_time: f64,

    /// Item length in seconds, `None` until the engine reports it
    pub duration: Option<f64>,

    /// An explicit seek or slider drag is in flight; periodic positions are ignored
    pub is_seeking: bool,
}

/// Result of asynchronous asset inspection
///
/// Every field is best-effort. `None` means "not found out", which is not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Whether the asset has a video track
    pub has_video: Option<bool>,

    /// Embedded cover art, encoded image bytes
    pub artwork: Option<Vec<u8>>,

    /// Asset duration in seconds
    pub duration: Option<f64>,
}

/// Configuration for the playlist controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Periodic position callback interval (default: 500ms)
    pub position_interval_ms: u64,

    /// Seconds stepped by the arrow keys (default: 5)
    pub arrow_step_secs: f64,

    /// Seconds stepped by the `j`/`l` keys (default: 10)
    pub jump_step_secs: f64,

    /// Initial shuffle mode (default: off)
    pub shuffle: bool,
}

impl ControllerConfig {
    /// Periodic position interval as a `Duration`
    pub fn position_interval(&self) -> Duration {
        Duration::from_millis(self.position_interval_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            position_interval_ms: 500,
            arrow_step_secs: 5.0,
            jump_step_secs: 10.0,
            shuffle: false,
        }
    }
}

/// Point-in-time copy of everything a UI binds to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub playlist: Vec<PlaylistItem>,
    pub current_index: usize,
    /// File name of the current item, empty when the playlist is empty
    pub current_file_name: String,
    pub state: PlaybackState,
    pub shuffle: bool,
    pub position: TransportPosition,
    pub has_video: bool,
    pub has_artwork: bool,
}
