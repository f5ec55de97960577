//! Playlist controller - core orchestration
//!
//! Owns the playlist, the current selection, shuffle, and the transport
//! position, and turns user intent into media engine calls.

use crate::{
    engine::{EngineEvent, MediaEngine},
    error::{ControllerError, Result},
    events::ControllerEvent,
    keys::{Command, KeyInput, KeyMap},
    shuffle::shuffle_items,
    types::{
        ControllerConfig, ControllerSnapshot, MediaHandle, MediaInfo, PlaybackState,
        TransportPosition, TransportStatus,
    },
};
use cine_core::{sort_natural, MediaLibrary, PlaylistItem};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Single authority for "what plays next" and "what does this input mean"
///
/// All methods take `&mut self`; the controller expects exactly one writer.
/// Engine callbacks must be handed to [`handle_engine_event`] on that same
/// context (see [`crate::ControllerActor`] for a ready-made one).
///
/// [`handle_engine_event`]: PlaylistController::handle_engine_event
pub struct PlaylistController {
    // Collaborators
    engine: Box<dyn MediaEngine>,
    library: Box<dyn MediaLibrary>,

    // Settings
    config: ControllerConfig,
    keymap: KeyMap,

    // Playlist
    playlist: Vec<PlaylistItem>,
    current_index: usize,
    shuffle: bool,

    // Transport
    state: PlaybackState,
    position: TransportPosition,
    // Seeks issued but not yet acknowledged, and whether a slider drag is open
    pending_seeks: u32,
    scrubbing: bool,

    // Metadata of the current item
    has_video: bool,
    artwork: Option<Vec<u8>>,

    // Handle of the item loaded in the engine (with a live completion subscription)
    current: Option<MediaHandle>,
    last_handle: MediaHandle,

    // Event queue for UI synchronization
    pending_events: Vec<ControllerEvent>,
}

impl PlaylistController {
    /// Create a controller and subscribe to periodic position updates
    pub fn new(
        mut engine: Box<dyn MediaEngine>,
        library: Box<dyn MediaLibrary>,
        config: ControllerConfig,
    ) -> Self {
        engine.subscribe_periodic_position(config.position_interval());

        Self {
            engine,
            library,
            keymap: KeyMap::from_config(&config),
            shuffle: config.shuffle,
            config,
            playlist: Vec::new(),
            current_index: 0,
            state: PlaybackState::Stopped,
            position: TransportPosition::default(),
            pending_seeks: 0,
            scrubbing: false,
            has_video: true,
            artwork: None,
            current: None,
            last_handle: MediaHandle::new(0),
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Replace the playlist with a file or the media inside a folder
    ///
    /// Starts the first item on success and returns the playlist length.
    /// On failure the playlist is emptied and playback stops.
    pub fn load_source(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();

        match self.list_source(path) {
            Ok(files) => {
                info!("Loaded {} item(s) from {}", files.len(), path.display());
                self.replace_playlist(files.into_iter().map(PlaylistItem::new).collect());
                if let Err(e) = self.start_current() {
                    debug!("Start after load failed: {}", e);
                }
                Ok(self.playlist.len())
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                self.clear_playlist();
                self.emit(ControllerEvent::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    fn list_source(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if self.library.is_single_file(path) {
            return Ok(vec![path.to_path_buf()]);
        }

        let files = self.library.list_media_files(path)?;
        if files.is_empty() {
            return Err(ControllerError::EmptyFilteredDirectory(path.to_path_buf()));
        }
        Ok(files)
    }

    fn replace_playlist(&mut self, mut items: Vec<PlaylistItem>) {
        // A fresh list arrives in natural order; keep the shuffle flag truthful
        if self.shuffle {
            shuffle_items(&mut items);
        }

        self.playlist = items;
        self.current_index = 0;
        self.emit_playlist_changed();
    }

    fn clear_playlist(&mut self) {
        if self.current.is_some() {
            self.engine.pause();
        }
        self.release_current();
        self.playlist.clear();
        self.current_index = 0;
        self.reset_item_state();
        self.set_state(PlaybackState::Stopped);
        self.emit_playlist_changed();
    }

    // ===== Playback Control =====

    /// Load, subscribe, inspect and play the item at the current index
    fn start_current(&mut self) -> Result<()> {
        let item = self
            .playlist
            .get(self.current_index)
            .cloned()
            .ok_or(ControllerError::NoCurrentItem)?;

        // Cancel first so a late "finished" from the old item can never advance
        self.release_current();

        let handle = self.mint_handle();
        self.reset_item_state();
        self.emit(ControllerEvent::CurrentItemChanged {
            index: self.current_index,
            item: item.clone(),
        });

        if let Err(e) = self.engine.load(handle, &item) {
            warn!("Engine rejected {}: {}", item, e);
            self.emit(ControllerEvent::Error {
                message: e.to_string(),
            });
            return Err(e);
        }

        self.current = Some(handle);
        self.engine.subscribe_completion(handle);
        self.engine.inspect(handle, &item);
        self.engine.play();
        self.set_state(PlaybackState::Playing);

        debug!("Started {} as {}", item, handle);
        Ok(())
    }

    /// Drop the completion subscription of the loaded item, if any
    fn release_current(&mut self) {
        if let Some(handle) = self.current.take() {
            self.engine.unsubscribe_completion(handle);
        }
    }

    fn mint_handle(&mut self) -> MediaHandle {
        self.last_handle = self.last_handle.next();
        self.last_handle
    }

    fn reset_item_state(&mut self) {
        self.position = TransportPosition::default();
        self.pending_seeks = 0;
        self.scrubbing = false;
        self.has_video = true;
        self.artwork = None;
        self.emit_position_changed();
        self.emit_metadata_changed();
    }

    /// Toggle between playing and paused
    ///
    /// Decided from the engine's actual status, not the cached state.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_none() {
            debug!("Toggle ignored: nothing loaded");
            return;
        }

        match self.engine.status() {
            TransportStatus::Playing => {
                self.engine.pause();
                self.set_state(PlaybackState::Paused);
            }
            TransportStatus::Paused | TransportStatus::Stopped => {
                self.engine.play();
                self.set_state(PlaybackState::Playing);
            }
        }
    }

    /// Skip to the next item, wrapping to the first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }

        self.current_index = (self.current_index + 1) % len;
        if let Err(e) = self.start_current() {
            debug!("Next failed: {}", e);
        }
    }

    /// Go to the previous item, wrapping to the last
    pub fn previous(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            return;
        }

        self.current_index = (self.current_index + len - 1) % len;
        if let Err(e) = self.start_current() {
            debug!("Previous failed: {}", e);
        }
    }

    // ===== Shuffle =====

    /// Flip shuffle mode
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle);
    }

    /// Set shuffle mode
    ///
    /// On: random permutation of the whole playlist. Off: natural order.
    /// Playback is not interrupted and `current_index` keeps its value, so it
    /// may now refer to a different item than the one playing.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }

        self.shuffle = enabled;
        if enabled {
            shuffle_items(&mut self.playlist);
        } else {
            sort_natural(&mut self.playlist);
        }

        self.emit(ControllerEvent::ShuffleChanged { enabled });
        self.emit_playlist_changed();
        if let Some(item) = self.playlist.get(self.current_index).cloned() {
            self.emit(ControllerEvent::CurrentItemChanged {
                index: self.current_index,
                item,
            });
        }
    }

    // ===== Seek =====

    /// Seek to an absolute position, clamped to the known duration
    ///
    /// Also ends a slider drag started with [`begin_scrub`].
    ///
    /// [`begin_scrub`]: PlaylistController::begin_scrub
    pub fn seek(&mut self, seconds: f64) {
        if self.current.is_none() || !seconds.is_finite() {
            return;
        }

        self.scrubbing = false;

        let target = match self.position.duration {
            Some(duration) => seconds.clamp(0.0, duration),
            None => seconds.max(0.0),
        };
        self.issue_seek(target);
    }

    /// Mark a slider drag in progress
    ///
    /// Periodic positions are ignored until the drag ends, either with
    /// [`seek`] (and the engine acknowledging it) or with [`end_scrub`].
    ///
    /// [`seek`]: PlaylistController::seek
    /// [`end_scrub`]: PlaylistController::end_scrub
    pub fn begin_scrub(&mut self) {
        if self.current.is_some() {
            self.scrubbing = true;
            self.position.is_seeking = true;
        }
    }

    /// Abandon a slider drag without seeking
    ///
    /// Periodic positions resume unless a seek is still in flight.
    pub fn end_scrub(&mut self) {
        if !self.scrubbing {
            return;
        }

        self.scrubbing = false;
        self.position.is_seeking = self.pending_seeks > 0;
    }

    /// Seek relative to the current position
    ///
    /// While an earlier seek is in flight the base is its target, since the
    /// engine still reports the old position. Otherwise the engine's live
    /// position is used. Never goes below zero; the upper end is left to the
    /// engine.
    pub fn step(&mut self, delta: f64) {
        if self.current.is_none() || !delta.is_finite() {
            return;
        }

        let now = if self.pending_seeks > 0 {
            self.position.current_time
        } else {
            let live = self.engine.current_position();
            if live.is_finite() {
                live
            } else {
                self.position.current_time
            }
        };
        self.issue_seek((now + delta).max(0.0));
    }

    /// Jump to `tenths / 10` of the duration (`0..=10`)
    ///
    /// No-op while the duration is unknown.
    pub fn percent_jump(&mut self, tenths: u8) {
        if self.current.is_none() || tenths > 10 {
            return;
        }

        let Some(duration) = self.position.duration.filter(|d| d.is_finite()) else {
            debug!("Percent jump ignored: duration unknown");
            return;
        };
        self.issue_seek(duration * f64::from(tenths) / 10.0);
    }

    fn issue_seek(&mut self, target: f64) {
        self.position.current_time = target;
        self.position.is_seeking = true;
        self.pending_seeks = self.pending_seeks.saturating_add(1);
        self.engine.seek(target);
        self.emit_position_changed();
    }

    // ===== Input =====

    /// Run the command bound to `input`
    ///
    /// Returns whether the input was consumed. Unbound input has no effect.
    pub fn handle_input(&mut self, input: KeyInput) -> bool {
        match self.keymap.resolve(input) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    /// Run a transport command
    pub fn apply(&mut self, command: Command) {
        trace!("Applying {:?}", command);
        match command {
            Command::TogglePlayPause => self.toggle_play_pause(),
            Command::Step(delta) => self.step(delta),
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::PercentJump(tenths) => self.percent_jump(tenths),
            Command::ToggleShuffle => self.toggle_shuffle(),
        }
    }

    // ===== Engine Events =====

    /// React to a notification from the media engine
    ///
    /// Events for any item other than the one currently loaded are dropped.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if self.current != Some(event.handle()) {
            trace!("Discarding stale engine event for {}", event.handle());
            return;
        }

        match event {
            EngineEvent::ItemFinished { .. } => {
                debug!("Item finished, advancing");
                self.next();
            }
            EngineEvent::Position { seconds, .. } => {
                if self.position.is_seeking || !seconds.is_finite() {
                    return;
                }
                self.position.current_time = seconds.max(0.0);
                self.emit_position_changed();
            }
            EngineEvent::SeekCompleted { .. } => {
                // One acknowledgement per issued seek; only the last one releases
                self.pending_seeks = self.pending_seeks.saturating_sub(1);
                self.position.is_seeking = self.pending_seeks > 0 || self.scrubbing;
            }
            EngineEvent::DurationResolved { seconds, .. } => {
                self.set_duration(seconds);
                self.emit_position_changed();
            }
            EngineEvent::Inspected { info, .. } => self.apply_media_info(info),
        }
    }

    fn apply_media_info(&mut self, info: MediaInfo) {
        if let Some(has_video) = info.has_video {
            self.has_video = has_video;
        }
        self.artwork = info.artwork;
        self.emit_metadata_changed();

        if let Some(duration) = info.duration {
            self.set_duration(duration);
            self.emit_position_changed();
        }
    }

    fn set_duration(&mut self, seconds: f64) {
        self.position.duration = (seconds.is_finite() && seconds >= 0.0).then_some(seconds);
    }

    // ===== State Queries =====

    /// Items in play order
    pub fn playlist(&self) -> &[PlaylistItem] {
        &self.playlist
    }

    /// Index of the current item (0 when the playlist is empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Item at the current index
    pub fn current_item(&self) -> Option<&PlaylistItem> {
        self.playlist.get(self.current_index)
    }

    /// File name of the current item, empty when there is none
    pub fn current_file_name(&self) -> String {
        self.current_item()
            .map(PlaylistItem::file_name)
            .unwrap_or_default()
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether shuffle is on
    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    /// Current transport position
    pub fn position(&self) -> TransportPosition {
        self.position
    }

    /// Whether the current item has a video track (assumed until inspected)
    pub fn has_video(&self) -> bool {
        self.has_video
    }

    /// Cover art of the current item
    pub fn artwork(&self) -> Option<&[u8]> {
        self.artwork.as_deref()
    }

    /// Handle of the item loaded in the engine
    pub fn current_handle(&self) -> Option<MediaHandle> {
        self.current
    }

    /// Active configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Key bindings
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Key bindings, for rebinding
    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    /// Copy of all observable state
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            playlist: self.playlist.clone(),
            current_index: self.current_index,
            current_file_name: self.current_file_name(),
            state: self.state,
            shuffle: self.shuffle,
            position: self.position,
            has_video: self.has_video,
            has_artwork: self.artwork.is_some(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    /// The queue is unbounded and periodic positions keep adding to it, so
    /// the host must drain it regularly (once per engine callback or UI
    /// frame is enough).
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit(&mut self, event: ControllerEvent) {
        self.pending_events.push(event);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.emit(ControllerEvent::StateChanged { state });
        }
    }

    fn emit_playlist_changed(&mut self) {
        self.emit(ControllerEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
    }

    fn emit_position_changed(&mut self) {
        self.emit(ControllerEvent::PositionChanged {
            current_time: self.position.current_time,
            duration: self.position.duration,
        });
    }

    fn emit_metadata_changed(&mut self) {
        self.emit(ControllerEvent::MetadataChanged {
            has_video: self.has_video,
            has_artwork: self.artwork.is_some(),
        });
    }
}
