//! Core domain: app state, tick ordering, camera and the test stage.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{setup_camera, spawn_test_stage};

/// Ordering of one simulation tick. Every domain plugin files its per-frame
/// systems under one of these sets.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Sample the input snapshot.
    Input,
    /// Ground and wall contact.
    Sense,
    /// Player-driven ground acceleration.
    Control,
    /// Move evaluation and lifecycle hooks.
    Moves,
    /// Push controller state into the physics body.
    Integrate,
    /// Flush sound and object commands.
    Effects,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Sense,
                    TickSet::Control,
                    TickSet::Moves,
                    TickSet::Integrate,
                    TickSet::Effects,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Run), spawn_test_stage);
    }
}
