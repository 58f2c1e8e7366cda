//! Moves domain: player abilities as two-state machines run by a per-entity
//! [`MoveManager`].

mod context;
mod duck;
mod kind;
mod lifecycle;
mod manager;
mod roll;
mod spindash;
mod systems;
#[cfg(test)]
mod tests;

pub use context::MoveContext;
pub use duck::Duck;
pub use kind::{MoveKind, MoveState};
pub use lifecycle::Move;
pub use manager::MoveManager;
pub use roll::Roll;
pub use spindash::Spindash;

use bevy::prelude::*;

use crate::content::MovesetFile;
use crate::core::TickSet;
use crate::moves::systems::tick_moves;

/// Capability name gating move evaluation for an entity.
pub const MOVE_MANAGER_CAPABILITY: &str = "MoveManager";

/// The player's moves in evaluation order: duck, then spindash, then roll.
pub fn standard_moveset(moveset: &MovesetFile) -> MoveManager {
    MoveManager::new()
        .with(Duck::new(moveset.duck.clone()))
        .with(Spindash::new(moveset.spindash.clone()))
        .with(Roll::new(moveset.roll.clone()))
}

/// Pushes fresh authoring values into already registered moves. Runtime
/// state is kept. Call between ticks only.
pub fn apply_moveset(manager: &mut MoveManager, moveset: &MovesetFile) {
    if let Some(duck) = manager.get_mut::<Duck>() {
        duck.config = moveset.duck.clone();
    }
    if let Some(roll) = manager.get_mut::<Roll>() {
        roll.config = moveset.roll.clone();
    }
    if let Some(spindash) = manager.get_mut::<Spindash>() {
        spindash.apply_config(moveset.spindash.clone());
    }
}

pub struct MovesPlugin;

impl Plugin for MovesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, tick_moves.in_set(TickSet::Moves));
    }
}
