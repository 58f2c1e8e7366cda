//! Debug domain: dev-only hotkeys for fast iteration.
//!
//! - Ctrl+R: reload `moves.ron` and push it into every move manager
//! - Ctrl+M: toggle move evaluation on the player
//! - Ctrl+P: log active moves and spindash charge
//! - Ctrl+E: spawn a spark at the player

mod state;
mod systems;

pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{handle_debug_hotkeys, update_status_message};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, update_status_message).run_if(in_state(GameState::Run)),
        );
    }
}
