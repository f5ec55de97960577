//! Keyboard command mapping
//!
//! Maps raw key input to transport commands. Resolution is pure, so a host
//! can decide whether a key was consumed without touching controller state.

use crate::types::ControllerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key input after the host has stripped modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyInput {
    Space,
    ArrowLeft,
    ArrowRight,
    /// Any printable character, case-sensitive
    Char(char),
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        if c == ' ' {
            Self::Space
        } else {
            Self::Char(c)
        }
    }
}

/// Transport command a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    TogglePlayPause,
    /// Relative seek in seconds (negative = backwards)
    Step(f64),
    Next,
    Previous,
    /// Jump to `tenths / 10` of the duration
    PercentJump(u8),
    ToggleShuffle,
}

/// Rebindable key table
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    bindings: HashMap<KeyInput, Command>,
}

impl KeyMap {
    /// Map with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Default bindings with the given step sizes
    ///
    /// | Key | Command |
    /// |---|---|
    /// | Space, `k` | toggle play/pause |
    /// | Right / Left | step +/- `arrow_step` |
    /// | `l` / `j` | step +/- `jump_step` |
    /// | `n` / `p` | next / previous |
    /// | `0`-`9` | percent jump |
    pub fn with_steps(arrow_step: f64, jump_step: f64) -> Self {
        let mut map = Self::empty();
        map.bind(KeyInput::Space, Command::TogglePlayPause);
        map.bind(KeyInput::Char('k'), Command::TogglePlayPause);
        map.bind(KeyInput::ArrowRight, Command::Step(arrow_step));
        map.bind(KeyInput::ArrowLeft, Command::Step(-arrow_step));
        map.bind(KeyInput::Char('l'), Command::Step(jump_step));
        map.bind(KeyInput::Char('j'), Command::Step(-jump_step));
        map.bind(KeyInput::Char('n'), Command::Next);
        map.bind(KeyInput::Char('p'), Command::Previous);
        for digit in 0..=9u8 {
            map.bind(KeyInput::Char(char::from(b'0' + digit)), Command::PercentJump(digit));
        }
        map
    }

    /// Default bindings sized from configuration
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::with_steps(config.arrow_step_secs, config.jump_step_secs)
    }

    /// Bind `key`, returning the command it replaced
    pub fn bind(&mut self, key: KeyInput, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    /// Remove the binding for `key`
    pub fn unbind(&mut self, key: KeyInput) -> Option<Command> {
        self.bindings.remove(&key)
    }

    /// Command bound to `key`, if any
    pub fn resolve(&self, key: KeyInput) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&ControllerConfig::default())
    }
}
