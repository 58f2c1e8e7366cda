//! Debug domain: hotkeys for hot-editing the moveset and inspecting moves.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::content::{ContentSettings, DATA_DIR};
use crate::debug::{DebugAction, DebugState};
use crate::effects::{Capabilities, ObjectAction, ObjectCommand};
use crate::movement::{HedgehogController, InputBindings, Player};
use crate::moves::{MOVE_MANAGER_CAPABILITY, MoveManager, Spindash, apply_moveset};

/// Handle Ctrl + key shortcuts. Runs outside the simulation tick, so config
/// edits land between ticks.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut settings: ResMut<ContentSettings>,
    mut bindings: ResMut<InputBindings>,
    mut objects: MessageWriter<ObjectCommand>,
    mut players: Query<
        (Entity, &mut MoveManager, &HedgehogController, Option<&Capabilities>),
        With<Player>,
    >,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    let actions: Vec<DebugAction> = keyboard
        .get_just_pressed()
        .filter_map(|key| DebugAction::from_key(*key))
        .collect();

    for action in actions {
        match action {
            DebugAction::ReloadMoveset => match settings.reload(Path::new(DATA_DIR)) {
                Ok(()) => {
                    *bindings = InputBindings::from_defs(&settings.moveset.bindings);
                    for (_, mut manager, _, _) in &mut players {
                        apply_moveset(&mut *manager, &settings.moveset);
                    }
                    debug_state.reloads += 1;
                    debug_state.set_message("Moveset reloaded", 2.0);
                    info!("[DEBUG] Moveset reloaded ({} total)", debug_state.reloads);
                }
                Err(e) => {
                    debug_state.set_message("Moveset reload failed", 3.0);
                    warn!("[DEBUG] {}", e);
                }
            },
            DebugAction::ToggleMoves => {
                for (entity, _, _, capabilities) in &players {
                    let enabled = capabilities
                        .is_some_and(|c| c.is_enabled(MOVE_MANAGER_CAPABILITY));
                    let name = MOVE_MANAGER_CAPABILITY.to_string();
                    objects.write(ObjectCommand {
                        emitter: entity,
                        action: if enabled {
                            ObjectAction::DisableCapability(name)
                        } else {
                            ObjectAction::EnableCapability(name)
                        },
                    });
                    info!("[DEBUG] Moves on {:?}: enabled={}", entity, !enabled);
                }
            }
            DebugAction::DumpMoves => {
                for (entity, manager, controller, _) in &players {
                    let charge = manager
                        .get::<Spindash>()
                        .map(Spindash::current_charge_power)
                        .unwrap_or(0.0);
                    info!(
                        "[DEBUG] {:?}: active={:?}, ground_velocity={:.3}, facing_forward={}, grounded={}, spindash_charge={:.3}",
                        entity,
                        manager.active_kinds().collect::<Vec<_>>(),
                        controller.ground_velocity(),
                        controller.facing_forward,
                        controller.grounded,
                        charge
                    );
                }
            }
            DebugAction::SpawnSpark => {
                for (entity, _, _, _) in &players {
                    objects.write(ObjectCommand {
                        emitter: entity,
                        action: ObjectAction::Spawn {
                            prefab: "spark".to_string(),
                            as_child: false,
                        },
                    });
                }
            }
        }
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, remaining)) = &mut debug_state.status_message {
        *remaining -= time.delta_secs();
        if *remaining <= 0.0 {
            debug_state.status_message = None;
        }
    }
}
