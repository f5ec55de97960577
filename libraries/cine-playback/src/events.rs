//! Controller Events
//!
//! Event-based communication for UI synchronization. Events are queued at
//! every observable change and drained by the host:
//! - State changes (play/pause/stop)
//! - Playlist replaced or reordered
//! - Current item changed
//! - Position and metadata updates

use crate::types::PlaybackState;
use cine_core::PlaylistItem;
use serde::{Deserialize, Serialize};

/// Events emitted by the playlist controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControllerEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Playlist replaced or reordered
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Item at the current index changed (new item started, or reorder)
    CurrentItemChanged {
        /// Current index
        index: usize,
        /// Item now at that index
        item: PlaylistItem,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Position or duration changed
    PositionChanged {
        /// Current position in seconds
        current_time: f64,
        /// Duration in seconds, if known
        duration: Option<f64>,
    },

    /// Video/artwork information changed
    MetadataChanged {
        /// Whether the current item has a video track
        has_video: bool,
        /// Whether cover art is available via `artwork()`
        has_artwork: bool,
    },

    /// Non-fatal error worth surfacing
    Error {
        /// Error message
        message: String,
    },
}
