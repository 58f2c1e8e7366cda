//! Data definitions for RON authoring files.
//!
//! Each struct maps 1:1 to a record in `assets/data/moves.ron`. Missing fields
//! fall back to the authoring defaults provided by the `Default` impls.

use serde::{Deserialize, Serialize};

/// Top-level moveset file: controller tuning, input bindings and per-move configs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MovesetFile {
    pub controller: ControllerTuning,
    pub bindings: Vec<BindingDef>,
    pub duck: DuckConfig,
    pub roll: RollConfig,
    pub spindash: SpindashConfig,
    pub audio: AudioConfig,
}

impl Default for MovesetFile {
    fn default() -> Self {
        Self {
            controller: ControllerTuning::default(),
            bindings: default_bindings(),
            duck: DuckConfig::default(),
            roll: RollConfig::default(),
            spindash: SpindashConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

fn default_bindings() -> Vec<BindingDef> {
    [
        ("Jump", &["Space", "KeyK"][..]),
        ("Down", &["KeyS", "ArrowDown"][..]),
        ("Left", &["KeyA", "ArrowLeft"][..]),
        ("Right", &["KeyD", "ArrowRight"][..]),
    ]
    .into_iter()
    .map(|(name, keys)| BindingDef {
        name: name.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
    })
    .collect()
}

/// Maps an input identifier (e.g. "Jump") to the keyboard keys that drive it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BindingDef {
    pub name: String,
    pub keys: Vec<String>,
}

/// Ground locomotion tuning for the physics controller.
///
/// Speeds are in units per second, accelerations in units per second squared.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerTuning {
    pub top_speed: f32,
    pub accel: f32,
    /// Braking when input points against the current ground velocity.
    pub decel: f32,
    /// Slowdown when there is no horizontal input.
    pub friction: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Render scale from simulation units to pixels.
    pub pixels_per_unit: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            top_speed: 6.0,
            accel: 16.875,
            decel: 180.0,
            friction: 16.875,
            gravity: 15.75,
            jump_velocity: 6.5,
            pixels_per_unit: 48.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DuckConfig {
    pub button: String,
    /// Ducking is only possible below this ground speed.
    pub max_speed: f32,
}

impl Default for DuckConfig {
    fn default() -> Self {
        Self {
            button: "Down".to_string(),
            max_speed: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RollConfig {
    pub button: String,
    /// Minimum ground speed for starting a roll from input.
    pub min_start_speed: f32,
    /// The roll ends once ground speed drops below this.
    pub stop_speed: f32,
    /// Rolling friction, in units per second squared.
    pub friction: f32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            button: "Down".to_string(),
            min_start_speed: 0.5,
            stop_speed: 0.3,
            friction: 2.8125,
        }
    }
}

/// Authoring record for the spindash move.
///
/// `Default` is the authoring reset: a freshly created spindash charges on
/// "Jump" and has no charge sound.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpindashConfig {
    /// Input identifier used for charging.
    pub charge_button: String,
    /// The lowest speed possible after releasing, in units per second.
    pub base_power: f32,
    /// Bonus speed gained per charge, in units per second.
    pub charge_power: f32,
    /// Current charge decreases by itself times this value each second.
    pub charge_power_decay: f32,
    /// Maximum total bonus speed from charging, in units per second.
    pub max_charge_power: f32,
    /// Asset path of the looping charge cue.
    pub charge_sound: Option<String>,
    pub charge_pitch_min: f32,
    pub charge_pitch_max: f32,
    /// How many charges it takes to go from minimum to maximum pitch.
    pub charge_pitch_steps: u32,
}

impl Default for SpindashConfig {
    fn default() -> Self {
        Self {
            charge_button: "Jump".to_string(),
            base_power: 4.8,
            charge_power: 0.6,
            charge_power_decay: 1.875,
            max_charge_power: 2.4,
            charge_sound: None,
            charge_pitch_min: 1.0,
            charge_pitch_max: 1.5,
            charge_pitch_steps: 4,
        }
    }
}

/// Stage-level clips played through the sound service. All optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    pub stage_bgm: Option<String>,
    pub jump_sound: Option<String>,
}
