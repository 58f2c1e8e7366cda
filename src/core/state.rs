//! Core domain: application state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is being loaded.
    #[default]
    Boot,
    /// The simulation is running.
    Run,
}
