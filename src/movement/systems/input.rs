//! Movement domain: input sampling for locomotion and moves.

use bevy::prelude::*;

use crate::movement::{InputBindings, InputSnapshot};

/// Rebuilds the snapshot from the keyboard. Runs once per tick, before any
/// move reads input.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut input: ResMut<InputSnapshot>,
) {
    input.clear();

    for name in bindings.names() {
        let keys = bindings.keys(name);
        let held = keys.iter().any(|key| keyboard.pressed(*key));
        let pressed = keys.iter().any(|key| keyboard.just_pressed(*key));
        input.set(name, held, pressed);
    }
}
