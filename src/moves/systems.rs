//! Moves domain: per-tick evaluation of every entity's moves.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::effects::{Capabilities, SoundCommand};
use crate::movement::{HedgehogController, InputSnapshot};
use crate::moves::{MOVE_MANAGER_CAPABILITY, MoveContext, MoveManager};

pub(crate) fn tick_moves(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    mut sounds: MessageWriter<SoundCommand>,
    mut query: Query<(
        Entity,
        &mut MoveManager,
        &mut HedgehogController,
        Option<&Capabilities>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut manager, mut controller, capabilities) in &mut query {
        if capabilities.is_some_and(|c| c.is_disabled(MOVE_MANAGER_CAPABILITY)) {
            // Frozen moves must not keep the player locked out of control
            controller.control_locked = false;
            continue;
        }

        let mut cues = Vec::new();
        MoveContext::new(&mut *manager, &mut *controller, &input, &mut cues, dt).tick();

        controller.control_locked = manager.locks_control();

        sounds.write_batch(
            cues.into_iter()
                .map(|cue| SoundCommand::Cue { emitter: entity, cue }),
        );
    }
}
