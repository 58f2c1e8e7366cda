//! Content domain: authoring data for the controller, input bindings and moves.

mod data;
mod loader;

pub use data::{
    AudioConfig, BindingDef, ControllerTuning, DuckConfig, MovesetFile, RollConfig, SpindashConfig,
};
pub use loader::{ContentLoadError, load_moveset, parse_moveset};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

/// Directory holding the RON data files, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";

/// The moveset currently in effect. Falls back to authoring defaults when the
/// data file is missing or malformed.
#[derive(Resource, Debug, Clone, Default)]
pub struct ContentSettings {
    pub moveset: MovesetFile,
}

impl ContentSettings {
    /// Reads the data directory, keeping the current settings on failure.
    pub fn reload(&mut self, base_path: &Path) -> Result<(), ContentLoadError> {
        self.moveset = load_moveset(base_path)?;
        Ok(())
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentSettings>()
            .add_systems(OnEnter(GameState::Boot), load_content);
    }
}

fn load_content(mut settings: ResMut<ContentSettings>, mut next_state: ResMut<NextState<GameState>>) {
    match settings.reload(Path::new(DATA_DIR)) {
        Ok(()) => info!(
            "Loaded moveset: {} bindings, spindash base_power={}, max_charge_power={}",
            settings.moveset.bindings.len(),
            settings.moveset.spindash.base_power,
            settings.moveset.spindash.max_charge_power
        ),
        Err(e) => warn!("{}; using built-in defaults", e),
    }

    next_state.set(GameState::Run);
}
