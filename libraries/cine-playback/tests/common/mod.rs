//! Shared test helpers: a recording media engine and an in-memory library

#![allow(dead_code)]

use cine_core::{CoreError, MediaLibrary, PlaylistItem};
use cine_playback::{
    ControllerConfig, MediaEngine, MediaHandle, PlaylistController, TransportStatus,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Calls observed by the mock engine
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(MediaHandle, PathBuf),
    Play,
    Pause,
    Seek(f64),
    SubscribeCompletion(MediaHandle),
    UnsubscribeCompletion(MediaHandle),
    SubscribePosition(Duration),
    Inspect(MediaHandle, PathBuf),
}

/// State shared between a test and its mock engine
#[derive(Debug)]
pub struct EngineState {
    pub calls: Vec<Call>,
    pub status: TransportStatus,
    pub position: f64,
    /// Paths whose load fails
    pub broken: Vec<PathBuf>,
    /// Handles with a live completion subscription
    pub subscribed: Vec<MediaHandle>,
}

impl EngineState {
    pub fn seeks(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Seek(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn loads(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Load(_, path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}

pub type SharedState = Arc<Mutex<EngineState>>;

/// Mock media engine recording every call
pub struct MockEngine {
    state: SharedState,
}

impl MockEngine {
    pub fn new() -> (Self, SharedState) {
        let state = Arc::new(Mutex::new(EngineState {
            calls: Vec::new(),
            status: TransportStatus::Stopped,
            position: 0.0,
            broken: Vec::new(),
            subscribed: Vec::new(),
        }));
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl MediaEngine for MockEngine {
    fn load(&mut self, handle: MediaHandle, item: &PlaylistItem) -> cine_playback::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Load(handle, item.path().to_path_buf()));
        if state.broken.iter().any(|p| p == item.path()) {
            return Err(cine_playback::ControllerError::asset_load("corrupt file"));
        }
        state.position = 0.0;
        Ok(())
    }

    fn play(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Play);
        state.status = TransportStatus::Playing;
    }

    fn pause(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Pause);
        state.status = TransportStatus::Paused;
    }

    fn seek(&mut self, seconds: f64) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Seek(seconds));
        state.position = seconds;
    }

    fn current_position(&self) -> f64 {
        self.state.lock().unwrap().position
    }

    fn status(&self) -> TransportStatus {
        self.state.lock().unwrap().status
    }

    fn subscribe_completion(&mut self, handle: MediaHandle) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::SubscribeCompletion(handle));
        state.subscribed.push(handle);
    }

    fn unsubscribe_completion(&mut self, handle: MediaHandle) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UnsubscribeCompletion(handle));
        state.subscribed.retain(|h| *h != handle);
    }

    fn subscribe_periodic_position(&mut self, interval: Duration) {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(Call::SubscribePosition(interval));
    }

    fn inspect(&mut self, handle: MediaHandle, item: &PlaylistItem) {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(Call::Inspect(handle, item.path().to_path_buf()));
    }
}

/// Library backed by a map of directory -> listing
#[derive(Default, Clone)]
pub struct MemoryLibrary {
    pub dirs: HashMap<PathBuf, Vec<PathBuf>>,
}

impl MemoryLibrary {
    pub fn with_dir(dir: &str, names: &[String]) -> Self {
        let mut library = Self::default();
        library.dirs.insert(
            PathBuf::from(dir),
            names.iter().map(|n| Path::new(dir).join(n)).collect(),
        );
        library
    }
}

impl MediaLibrary for MemoryLibrary {
    fn list_media_files(&self, dir: &Path) -> cine_core::Result<Vec<PathBuf>> {
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| CoreError::no_access(dir, "no such directory"))
    }

    fn is_single_file(&self, _path: &Path) -> bool {
        false
    }
}

/// Controller over `/media` containing `names` (already in play order)
pub fn controller_with(names: &[String]) -> (PlaylistController, SharedState) {
    let (engine, state) = MockEngine::new();
    let mut controller = PlaylistController::new(
        Box::new(engine),
        Box::new(MemoryLibrary::with_dir("/media", names)),
        ControllerConfig::default(),
    );
    if !names.is_empty() {
        controller.load_source("/media").unwrap();
    }
    (controller, state)
}

pub fn file_names(controller: &PlaylistController) -> Vec<String> {
    controller
        .playlist()
        .iter()
        .map(PlaylistItem::file_name)
        .collect()
}
