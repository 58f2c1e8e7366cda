//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Number of successful moveset reloads this session
    pub reloads: u32,
    /// Message to display temporarily, with seconds remaining
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Actions that can be triggered from debug hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ReloadMoveset,
    ToggleMoves,
    DumpMoves,
    SpawnSpark,
}

impl DebugAction {
    /// Ctrl + key bindings for each action.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyR => Some(DebugAction::ReloadMoveset),
            KeyCode::KeyM => Some(DebugAction::ToggleMoves),
            KeyCode::KeyP => Some(DebugAction::DumpMoves),
            KeyCode::KeyE => Some(DebugAction::SpawnSpark),
            _ => None,
        }
    }
}
