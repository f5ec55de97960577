//! Cine Player - Playback Control
//!
//! Platform-agnostic playlist and transport control for Cine Player.
//!
//! This crate provides:
//! - Playlist loading from a file or folder (via a `MediaLibrary`)
//! - Next/previous with wrap-around and auto-advance on completion
//! - Shuffle (random permutation) and natural-order restore
//! - Seek, relative step and percent jump
//! - Keyboard command mapping
//! - Stale-result protection for asynchronous engine callbacks
//!
//! # Architecture
//!
//! `cine-playback` never decodes or renders anything:
//! - No dependency on a UI toolkit
//! - No dependency on a media framework
//! - One writer: every mutation goes through `&mut PlaylistController`
//!
//! Platform-specific code (media engine, file access) is provided via traits.
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use cine_playback::{
//!     ControllerConfig, MediaEngine, MediaHandle, PlaylistController, Result, TransportStatus,
//! };
//! use cine_core::PlaylistItem;
//! use cine_library::FileScanner;
//! use std::time::Duration;
//!
//! // Implement MediaEngine for your platform
//! struct MyEngine {
//!     // ... platform player
//! }
//!
//! impl MediaEngine for MyEngine {
//!     fn load(&mut self, handle: MediaHandle, item: &PlaylistItem) -> Result<()> {
//!         // Replace the current item, remember `handle` for callbacks
//!         Ok(())
//!     }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, seconds: f64) {}
//!     fn current_position(&self) -> f64 {
//!         0.0
//!     }
//!     fn status(&self) -> TransportStatus {
//!         TransportStatus::Stopped
//!     }
//!     fn subscribe_completion(&mut self, handle: MediaHandle) {}
//!     fn unsubscribe_completion(&mut self, handle: MediaHandle) {}
//!     fn subscribe_periodic_position(&mut self, interval: Duration) {}
//!     fn inspect(&mut self, handle: MediaHandle, item: &PlaylistItem) {}
//! }
//!
//! let mut controller = PlaylistController::new(
//!     Box::new(MyEngine {}),
//!     Box::new(FileScanner::new()),
//!     ControllerConfig::default(),
//! );
//!
//! controller.load_source("/media/movies").ok();
//! controller.next();
//! controller.toggle_shuffle();
//!
//! // Push UI state changes
//! for event in controller.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```
//!
//! # Example: Controller Thread
//!
//! ```rust,ignore
//! use cine_playback::{ControllerActor, KeyInput};
//!
//! let handle = ControllerActor::spawn(controller)?;
//! let sink = handle.engine_sink(); // give this to the engine's callbacks
//!
//! handle.load_source("/media/movies");
//! let consumed = handle.handle_input(KeyInput::Space);
//! ```

mod actor;
mod controller;
mod engine;
mod error;
mod events;
mod keys;
mod shuffle;
pub mod types;

// Public exports
pub use actor::{ControllerActor, ControllerCommand, ControllerHandle, EngineEventSink};
pub use controller::PlaylistController;
pub use engine::{EngineEvent, MediaEngine};
pub use error::{ControllerError, Result};
pub use events::ControllerEvent;
pub use keys::{Command, KeyInput, KeyMap};
pub use shuffle::{shuffle_items, shuffle_items_with};
pub use types::{
    ControllerConfig, ControllerSnapshot, MediaHandle, MediaInfo, PlaybackState,
    TransportPosition, TransportStatus,
};
