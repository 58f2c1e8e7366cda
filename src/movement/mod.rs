//! Movement domain: the physics controller, input snapshot and locomotion.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{GameLayer, Ground, HedgehogController, Player, Wall};
pub use resources::{InputBindings, InputSnapshot, key_from_name};
pub use systems::ground_control_delta;

use bevy::prelude::*;

use crate::content::ContentSettings;
use crate::core::{GameState, TickSet};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_ground_control, detect_ground, detect_walls, integrate_velocity, read_input,
};

/// Capability name gating player-driven ground acceleration.
pub const GROUND_CONTROL_CAPABILITY: &str = "GroundControl";

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>()
            .init_resource::<InputSnapshot>()
            .add_systems(OnEnter(GameState::Run), (sync_bindings, spawn_player).chain())
            .add_systems(Update, read_input.in_set(TickSet::Input))
            .add_systems(Update, (detect_ground, detect_walls).chain().in_set(TickSet::Sense))
            .add_systems(Update, apply_ground_control.in_set(TickSet::Control))
            .add_systems(Update, integrate_velocity.in_set(TickSet::Integrate));
    }
}

/// Rebuilds the key map from the loaded moveset.
pub(crate) fn sync_bindings(settings: Res<ContentSettings>, mut bindings: ResMut<InputBindings>) {
    *bindings = InputBindings::from_defs(&settings.moveset.bindings);
    info!("Input bindings: {} identifiers", bindings.names().count());
}
