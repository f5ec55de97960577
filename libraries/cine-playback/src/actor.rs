//! Single-writer controller thread
//!
//! Moves a [`PlaylistController`] onto its own thread and serializes every
//! mutation (UI commands and engine callbacks alike) through one channel.

use crate::{
    controller::PlaylistController,
    engine::EngineEvent,
    error::Result,
    events::ControllerEvent,
    keys::{Command, KeyInput, KeyMap},
    types::ControllerSnapshot,
};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::thread::JoinHandle;

/// Commands sent to the controller thread
#[derive(Debug)]
pub enum ControllerCommand {
    /// Replace the playlist from a file or folder
    LoadSource(PathBuf),

    /// Run a transport command
    Run(Command),

    /// Seek to an absolute position (in seconds)
    Seek(f64),

    /// Slider drag started
    BeginScrub,

    /// Slider drag abandoned without a seek
    EndScrub,

    /// Engine callback marshaled onto the controller thread
    Engine(EngineEvent),

    /// Reply with a state snapshot
    Snapshot(Sender<ControllerSnapshot>),

    /// Stop the thread
    Shutdown,
}

/// Spawns controller threads
pub struct ControllerActor;

impl ControllerActor {
    /// Move `controller` onto a dedicated thread
    ///
    /// Key bindings are copied to the handle so input can be resolved on the
    /// caller's side.
    pub fn spawn(controller: PlaylistController) -> Result<ControllerHandle> {
        let keymap = controller.keymap().clone();
        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();

        let thread = std::thread::Builder::new()
            .name("cine-controller".to_string())
            .spawn(move || run(controller, &command_rx, &event_tx))?;

        Ok(ControllerHandle {
            command_tx,
            event_rx,
            keymap,
            thread: Some(thread),
        })
    }
}

fn run(
    mut controller: PlaylistController,
    command_rx: &Receiver<ControllerCommand>,
    event_tx: &Sender<ControllerEvent>,
) {
    tracing::debug!("Controller thread started");

    for command in command_rx {
        match command {
            ControllerCommand::LoadSource(path) => {
                // Failures are already reported as ControllerEvent::Error
                let _ = controller.load_source(path);
            }
            ControllerCommand::Run(command) => controller.apply(command),
            ControllerCommand::Seek(seconds) => controller.seek(seconds),
            ControllerCommand::BeginScrub => controller.begin_scrub(),
            ControllerCommand::EndScrub => controller.end_scrub(),
            ControllerCommand::Engine(event) => controller.handle_engine_event(event),
            ControllerCommand::Snapshot(reply) => {
                let _ = reply.send(controller.snapshot());
            }
            ControllerCommand::Shutdown => break,
        }

        for event in controller.drain_events() {
            if event_tx.send(event).is_err() {
                // Nobody listening; keep serving commands
                break;
            }
        }
    }

    tracing::debug!("Controller thread stopped");
}

/// Handle engines use to deliver callbacks to the controller thread
#[derive(Debug, Clone)]
pub struct EngineEventSink {
    command_tx: Sender<ControllerCommand>,
}

impl EngineEventSink {
    /// Queue an engine event; returns false once the controller is gone
    pub fn post(&self, event: EngineEvent) -> bool {
        self.command_tx
            .send(ControllerCommand::Engine(event))
            .is_ok()
    }
}

/// UI-side handle to a running controller thread
///
/// Dropping the handle shuts the thread down.
pub struct ControllerHandle {
    command_tx: Sender<ControllerCommand>,
    event_rx: Receiver<ControllerEvent>,
    keymap: KeyMap,
    thread: Option<JoinHandle<()>>,
}

impl ControllerHandle {
    /// Send a raw command; returns false once the controller is gone
    pub fn send(&self, command: ControllerCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Replace the playlist from a file or folder
    pub fn load_source(&self, path: impl Into<PathBuf>) -> bool {
        self.send(ControllerCommand::LoadSource(path.into()))
    }

    /// Pause if playing, play otherwise
    pub fn toggle_play_pause(&self) -> bool {
        self.send(ControllerCommand::Run(Command::TogglePlayPause))
    }

    /// Skip to the next item, wrapping to the first
    pub fn next(&self) -> bool {
        self.send(ControllerCommand::Run(Command::Next))
    }

    /// Go to the previous item, wrapping to the last
    pub fn previous(&self) -> bool {
        self.send(ControllerCommand::Run(Command::Previous))
    }

    /// Flip shuffle mode
    pub fn toggle_shuffle(&self) -> bool {
        self.send(ControllerCommand::Run(Command::ToggleShuffle))
    }

    /// Seek to an absolute position (in seconds); ends a slider drag
    pub fn seek(&self, seconds: f64) -> bool {
        self.send(ControllerCommand::Seek(seconds))
    }

    /// Slider drag started; positions are held until it ends
    pub fn begin_scrub(&self) -> bool {
        self.send(ControllerCommand::BeginScrub)
    }

    /// Slider drag abandoned without seeking
    pub fn end_scrub(&self) -> bool {
        self.send(ControllerCommand::EndScrub)
    }

    /// Seek relative to the current position (in seconds)
    pub fn step(&self, delta: f64) -> bool {
        self.send(ControllerCommand::Run(Command::Step(delta)))
    }

    /// Jump to `tenths / 10` of the duration
    pub fn percent_jump(&self, tenths: u8) -> bool {
        self.send(ControllerCommand::Run(Command::PercentJump(tenths)))
    }

    /// Resolve `input` and forward its command
    ///
    /// Returns whether the input was consumed, without waiting for the
    /// controller thread.
    pub fn handle_input(&self, input: KeyInput) -> bool {
        match self.keymap.resolve(input) {
            Some(command) => {
                self.send(ControllerCommand::Run(command));
                true
            }
            None => false,
        }
    }

    /// Key bindings used by [`handle_input`](Self::handle_input)
    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    /// Sink for engine callbacks
    pub fn engine_sink(&self) -> EngineEventSink {
        EngineEventSink {
            command_tx: self.command_tx.clone(),
        }
    }

    /// Controller events, in emission order
    ///
    /// The channel is unbounded and receives a position update every
    /// interval while playing; keep receiving from it for as long as the
    /// handle lives.
    pub fn events(&self) -> &Receiver<ControllerEvent> {
        &self.event_rx
    }

    /// Current state, after every previously sent command has been applied
    pub fn snapshot(&self) -> Option<ControllerSnapshot> {
        let (reply_tx, reply_rx) = bounded(1);
        if !self.send(ControllerCommand::Snapshot(reply_tx)) {
            return None;
        }
        reply_rx.recv().ok()
    }

    /// Stop the controller thread and wait for it
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = self.command_tx.send(ControllerCommand::Shutdown);
            if thread.join().is_err() {
                tracing::warn!("Controller thread panicked");
            }
        }
    }
}

impl Drop for ControllerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
