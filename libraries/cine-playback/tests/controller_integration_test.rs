//! Integration tests: controller driven over real directories
//!
//! Uses the file-system scanner from `cine-library` with temporary folders and
//! a recording engine in place of a platform player.

mod common;

use cine_library::FileScanner;
use cine_playback::{
    ControllerConfig, ControllerError, ControllerEvent, EngineEvent, KeyInput, MediaInfo,
    PlaybackState, PlaylistController,
};
use common::{file_names, init_tracing, Call, MockEngine, SharedState};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"media").unwrap();
    }
}

fn scanner_controller() -> (PlaylistController, SharedState) {
    let (engine, state) = MockEngine::new();
    let controller = PlaylistController::new(
        Box::new(engine),
        Box::new(FileScanner::new()),
        ControllerConfig::default(),
    );
    (controller, state)
}

#[test]
fn test_folder_is_filtered_and_naturally_ordered() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["b.mp4", "A.mp3", "c.txt"]);

    let (mut controller, state) = scanner_controller();
    let len = controller.load_source(dir.path()).unwrap();

    assert_eq!(len, 2);
    assert_eq!(file_names(&controller), vec!["A.mp3", "b.mp4"]);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(controller.current_file_name(), "A.mp3");
    assert_eq!(state.lock().unwrap().loads(), vec![dir.path().join("A.mp3")]);
}

#[test]
fn test_episode_numbers_sort_numerically() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(
        dir.path(),
        &["Episode 10.mp4", "Episode 2.mp4", "Episode 1.mp4", ".hidden.mp4"],
    );

    let (mut controller, _state) = scanner_controller();
    controller.load_source(dir.path()).unwrap();

    assert_eq!(
        file_names(&controller),
        vec!["Episode 1.mp4", "Episode 2.mp4", "Episode 10.mp4"]
    );
}

#[test]
fn test_single_file_source() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["movie.mov", "other.mp4"]);
    let file = dir.path().join("movie.mov");

    let (mut controller, state) = scanner_controller();
    assert_eq!(controller.load_source(&file).unwrap(), 1);

    assert_eq!(file_names(&controller), vec!["movie.mov"]);
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(state.lock().unwrap().loads(), vec![file]);
}

#[test]
fn test_folder_without_media_reports_empty() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["notes.txt", "cover.jpg"]);

    let (mut controller, state) = scanner_controller();
    let err = controller.load_source(dir.path()).unwrap_err();

    assert!(matches!(err, ControllerError::EmptyFilteredDirectory(_)));
    assert!(controller.playlist().is_empty());
    assert_eq!(controller.state(), PlaybackState::Stopped);
    assert!(state.lock().unwrap().loads().is_empty());

    let events = controller.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, ControllerEvent::Error { .. })));
}

#[test]
fn test_missing_folder_reports_no_access() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let (mut controller, _state) = scanner_controller();
    let err = controller.load_source(&missing).unwrap_err();

    assert!(matches!(err, ControllerError::NoAccessOrMissingPath { .. }));
    assert!(controller.playlist().is_empty());
}

#[test]
fn test_failed_reload_clears_previous_playlist() {
    init_tracing();
    let good = TempDir::new().unwrap();
    touch(good.path(), &["a.mp3", "b.mp3"]);
    let empty = TempDir::new().unwrap();

    let (mut controller, state) = scanner_controller();
    controller.load_source(good.path()).unwrap();
    let handle = controller.current_handle().unwrap();

    assert!(controller.load_source(empty.path()).is_err());

    assert!(controller.playlist().is_empty());
    assert_eq!(controller.current_handle(), None);
    assert_eq!(controller.state(), PlaybackState::Stopped);
    assert!(state.lock().unwrap().subscribed.is_empty());

    // The old item can no longer advance anything
    controller.handle_engine_event(EngineEvent::ItemFinished { handle });
    assert!(controller.playlist().is_empty());
    assert_eq!(state.lock().unwrap().loads().len(), 1);
}

#[test]
fn test_auto_advance_runs_through_folder_and_wraps() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["1.mp3", "2.mp3", "3.mp3"]);

    let (mut controller, state) = scanner_controller();
    controller.load_source(dir.path()).unwrap();

    let mut played = vec![controller.current_file_name()];
    for _ in 0..3 {
        let handle = controller.current_handle().unwrap();
        controller.handle_engine_event(EngineEvent::ItemFinished { handle });
        played.push(controller.current_file_name());

        // Exactly one live completion subscription at any time
        assert_eq!(state.lock().unwrap().subscribed.len(), 1);
    }

    assert_eq!(played, vec!["1.mp3", "2.mp3", "3.mp3", "1.mp3"]);
    assert_eq!(controller.state(), PlaybackState::Playing);
}

#[test]
fn test_late_finish_from_skipped_item_is_ignored() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["a.mp4", "b.mp4", "c.mp4"]);

    let (mut controller, _state) = scanner_controller();
    controller.load_source(dir.path()).unwrap();
    let first = controller.current_handle().unwrap();

    controller.next();
    controller.handle_engine_event(EngineEvent::ItemFinished { handle: first });

    assert_eq!(controller.current_file_name(), "b.mp4");
}

#[test]
fn test_audio_item_metadata_flow() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["song.m4a", "clip.mp4"]);

    let (mut controller, state) = scanner_controller();
    controller.load_source(dir.path()).unwrap();
    let handle = controller.current_handle().unwrap();
    assert_eq!(controller.current_file_name(), "clip.mp4");

    // Inspection was requested for the started item
    assert!(state
        .lock()
        .unwrap()
        .calls
        .contains(&Call::Inspect(handle, dir.path().join("clip.mp4"))));

    controller.next();
    let song = controller.current_handle().unwrap();
    controller.handle_engine_event(EngineEvent::Inspected {
        handle: song,
        info: MediaInfo {
            has_video: Some(false),
            artwork: Some(vec![0x89, 0x50, 0x4e, 0x47]),
            duration: Some(180.0),
        },
    });

    assert!(!controller.has_video());
    assert_eq!(controller.artwork(), Some(&[0x89, 0x50, 0x4e, 0x47][..]));
    assert_eq!(controller.position().duration, Some(180.0));

    // Starting the next item resets everything learned about the last one
    controller.next();
    assert!(controller.has_video());
    assert!(controller.artwork().is_none());
    assert_eq!(controller.position().duration, None);
}

#[test]
fn test_keyboard_session() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["a.mp4", "b.mp4"]);

    let (mut controller, state) = scanner_controller();
    controller.load_source(dir.path()).unwrap();
    let handle = controller.current_handle().unwrap();
    controller.handle_engine_event(EngineEvent::DurationResolved {
        handle,
        seconds: 100.0,
    });

    assert!(controller.handle_input(KeyInput::Space));
    assert_eq!(controller.state(), PlaybackState::Paused);
    assert!(controller.handle_input(KeyInput::Char('k')));
    assert_eq!(controller.state(), PlaybackState::Playing);

    assert!(controller.handle_input(KeyInput::Char('5')));
    assert!(controller.handle_input(KeyInput::Char('l')));
    assert!(controller.handle_input(KeyInput::ArrowLeft));
    assert_eq!(state.lock().unwrap().seeks(), vec![50.0, 60.0, 55.0]);

    assert!(!controller.handle_input(KeyInput::Char('x')));

    assert!(controller.handle_input(KeyInput::Char('n')));
    assert_eq!(controller.current_file_name(), "b.mp4");
    assert!(controller.handle_input(KeyInput::Char('p')));
    assert_eq!(controller.current_file_name(), "a.mp4");
}
