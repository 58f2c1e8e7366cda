//! Movement domain: ground control and physics integration.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{ContentSettings, ControllerTuning};
use crate::effects::{Capabilities, SoundCommand};
use crate::movement::{GROUND_CONTROL_CAPABILITY, HedgehogController, InputSnapshot, Player};

/// Ground speed change for one tick of player input.
///
/// Accelerates toward `axis` up to the top speed, brakes when the input
/// opposes the current motion and applies friction without input. Speed
/// gained from moves above the top speed is kept, not clipped.
pub fn ground_control_delta(tuning: &ControllerTuning, speed: f32, axis: f32, dt: f32) -> f32 {
    if axis.abs() < 0.1 {
        let step = (tuning.friction * dt).min(speed.abs());
        return -step * speed.signum();
    }

    if speed != 0.0 && speed.signum() != axis.signum() {
        // Braking may flip direction, but no further than one accel step
        let braked = speed + tuning.decel * dt * axis.signum();
        if braked.signum() == speed.signum() {
            return braked - speed;
        }
        return tuning.accel * dt * axis.signum() - speed;
    }

    if speed.abs() >= tuning.top_speed {
        return 0.0;
    }

    let target = (speed + tuning.accel * dt * axis.signum()).clamp(-tuning.top_speed, tuning.top_speed);
    target - speed
}

pub(crate) fn apply_ground_control(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    settings: Res<ContentSettings>,
    mut query: Query<(&mut HedgehogController, Option<&Capabilities>), With<Player>>,
) {
    let dt = time.delta_secs();
    let tuning = &settings.moveset.controller;
    let axis = input.axis_x();

    for (mut controller, capabilities) in &mut query {
        if capabilities.is_some_and(|c| c.is_disabled(GROUND_CONTROL_CAPABILITY)) {
            continue;
        }
        // Moves that hold the controller also freeze facing
        if controller.control_locked {
            continue;
        }

        if axis > 0.1 {
            controller.facing_forward = true;
        } else if axis < -0.1 {
            controller.facing_forward = false;
        }

        if !controller.grounded {
            continue;
        }

        let delta = ground_control_delta(tuning, controller.ground_velocity(), axis, dt);
        controller.add_ground_velocity(delta);
    }
}

pub(crate) fn integrate_velocity(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    settings: Res<ContentSettings>,
    mut sounds: MessageWriter<SoundCommand>,
    mut query: Query<(&Transform, &HedgehogController, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let tuning = &settings.moveset.controller;
    let scale = tuning.pixels_per_unit;

    for (transform, controller, mut velocity) in &mut query {
        velocity.x = controller.ground_velocity() * scale;

        if !controller.grounded {
            velocity.y -= tuning.gravity * scale * dt;
            continue;
        }

        if velocity.y < 0.0 {
            velocity.y = 0.0;
        }

        if input.was_pressed("Jump") && !controller.control_locked {
            velocity.y = tuning.jump_velocity * scale;
            debug!("Jump: ground_velocity={}", controller.ground_velocity());

            if let Some(clip) = &settings.moveset.audio.jump_sound {
                sounds.write(SoundCommand::PlayClipAt {
                    clip: clip.clone(),
                    position: transform.translation.truncate(),
                });
            }
        }
    }
}
