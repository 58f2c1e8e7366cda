//! Movement domain: input bindings and the per-tick input snapshot.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::content::BindingDef;

/// Input identifier to keyboard keys, built from the moveset bindings.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputBindings {
    keys: HashMap<String, Vec<KeyCode>>,
}

impl InputBindings {
    pub fn from_defs(defs: &[BindingDef]) -> Self {
        let mut keys: HashMap<String, Vec<KeyCode>> = HashMap::new();
        for def in defs {
            let entry = keys.entry(def.name.clone()).or_default();
            for name in &def.keys {
                match key_from_name(name) {
                    Some(code) => entry.push(code),
                    None => warn!("Unknown key '{}' in binding '{}'", name, def.name),
                }
            }
        }
        Self { keys }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    pub fn keys(&self, name: &str) -> &[KeyCode] {
        self.keys.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Button state captured once per tick, before any move runs.
///
/// Queries for identifiers that were never bound read as not held and not
/// pressed.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
    held: HashSet<String>,
    pressed: HashSet<String>,
}

impl InputSnapshot {
    /// Level query: the button is down this tick.
    pub fn is_held(&self, name: &str) -> bool {
        self.held.contains(name)
    }

    /// Edge query: the button went down this tick.
    pub fn was_pressed(&self, name: &str) -> bool {
        self.pressed.contains(name)
    }

    /// Horizontal axis from the "Left"/"Right" identifiers.
    pub fn axis_x(&self) -> f32 {
        let mut x = 0.0;
        if self.is_held("Left") {
            x -= 1.0;
        }
        if self.is_held("Right") {
            x += 1.0;
        }
        x
    }

    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub fn set(&mut self, name: &str, held: bool, pressed: bool) {
        if held {
            self.held.insert(name.to_string());
        } else {
            self.held.remove(name);
        }
        if pressed {
            self.pressed.insert(name.to_string());
        } else {
            self.pressed.remove(name);
        }
    }

    /// Shorthand for a button that is held but was not pressed this tick.
    #[cfg(test)]
    pub fn hold(mut self, name: &str) -> Self {
        self.set(name, true, false);
        self
    }

    /// Shorthand for a button that went down this tick.
    #[cfg(test)]
    pub fn press(mut self, name: &str) -> Self {
        self.set(name, true, true);
        self
    }
}

/// Maps the key names used in RON bindings to bevy key codes.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let code = match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "KeyA" => KeyCode::KeyA,
        "KeyD" => KeyCode::KeyD,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyS" => KeyCode::KeyS,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyZ" => KeyCode::KeyZ,
        _ => return None,
    };
    Some(code)
}
