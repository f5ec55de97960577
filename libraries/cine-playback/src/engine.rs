//! Media engine collaborator
//!
//! Abstracts the platform media framework (decoding, rendering, timing) so
//! the controller can run against any backend, or a recording mock in tests.

use crate::error::Result;
use crate::types::{MediaHandle, MediaInfo, TransportStatus};
use cine_core::PlaylistItem;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Platform media engine
///
/// Synchronous methods must return promptly. Anything slow (asset
/// inspection, seeking, duration resolution) is started here and finishes
/// later as an [`EngineEvent`], which the host must deliver on the
/// controller's own context.
pub trait MediaEngine: Send {
    /// Begin preparing `item` for playback, replacing whatever was loaded
    ///
    /// # Returns
    /// * `Ok(())` - Item accepted; events for it will carry `handle`
    /// * `Err(_)` - Item rejected outright (missing, unsupported, ...)
    fn load(&mut self, handle: MediaHandle, item: &PlaylistItem) -> Result<()>;

    /// Start or resume the loaded item
    fn play(&mut self);

    /// Pause the loaded item
    fn pause(&mut self);

    /// Seek the loaded item; acknowledged with [`EngineEvent::SeekCompleted`]
    fn seek(&mut self, seconds: f64);

    /// Current playback position in seconds
    fn current_position(&self) -> f64;

    /// Actual transport status
    fn status(&self) -> TransportStatus;

    /// Fire [`EngineEvent::ItemFinished`] once when `handle` plays to its end
    fn subscribe_completion(&mut self, handle: MediaHandle);

    /// Cancel the completion notification for `handle`
    fn unsubscribe_completion(&mut self, handle: MediaHandle);

    /// Emit [`EngineEvent::Position`] every `interval` while playing
    fn subscribe_periodic_position(&mut self, interval: Duration);

    /// Inspect `item` in the background; reported with [`EngineEvent::Inspected`]
    ///
    /// Failures are reported as an empty [`MediaInfo`] or not at all.
    fn inspect(&mut self, handle: MediaHandle, item: &PlaylistItem);
}

/// Notifications from the media engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Item played to its end
    ItemFinished { handle: MediaHandle },

    /// Periodic position update
    Position { handle: MediaHandle, seconds: f64 },

    /// A seek has been applied
    SeekCompleted { handle: MediaHandle },

    /// Duration became known
    DurationResolved { handle: MediaHandle, seconds: f64 },

    /// Asset inspection finished
    Inspected { handle: MediaHandle, info: MediaInfo },
}

impl EngineEvent {
    /// Handle of the item this event is about
    pub fn handle(&self) -> MediaHandle {
        match self {
            Self::ItemFinished { handle }
            | Self::Position { handle, .. }
            | Self::SeekCompleted { handle }
            | Self::DurationResolved { handle, .. }
            | Self::Inspected { handle, .. } => *handle,
        }
    }
}
