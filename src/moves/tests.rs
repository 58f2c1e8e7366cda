//! Moves domain: tests for the manager protocol and the concrete moves.

use super::{
    Duck, Move, MoveContext, MoveKind, MoveManager, MoveState, Roll, Spindash, apply_moveset,
    standard_moveset,
};
use super::MOVE_MANAGER_CAPABILITY;
use super::systems::tick_moves;
use crate::content::{MovesetFile, SpindashConfig};
use crate::effects::{
    Capabilities, CueCommand, ObjectAction, ObjectCommand, PrefabLibrary, SoundCommand,
    apply_object_commands,
};
use crate::movement::{HedgehogController, InputSnapshot};
use bevy::prelude::*;

const DT: f32 = 1.0 / 60.0;

/// A grounded player with the standard moveset.
struct Rig {
    manager: MoveManager,
    controller: HedgehogController,
    cues: Vec<CueCommand>,
}

impl Rig {
    fn new() -> Self {
        Self::with_moveset(&MovesetFile::default())
    }

    fn with_moveset(moveset: &MovesetFile) -> Self {
        Self::with_manager(standard_moveset(moveset))
    }

    fn with_manager(manager: MoveManager) -> Self {
        let mut controller = HedgehogController::default();
        controller.grounded = true;
        Self {
            manager,
            controller,
            cues: Vec::new(),
        }
    }

    fn with_charge_sound() -> Self {
        let mut moveset = MovesetFile::default();
        moveset.spindash.charge_sound = Some("audio/charge.ogg".to_string());
        Self::with_moveset(&moveset)
    }

    fn tick(&mut self, input: &InputSnapshot, dt: f32) {
        MoveContext::new(
            &mut self.manager,
            &mut self.controller,
            input,
            &mut self.cues,
            dt,
        )
        .tick();
    }

    fn perform(&mut self, kind: MoveKind, activate: bool, force: bool) -> bool {
        let input = InputSnapshot::default();
        MoveContext::new(
            &mut self.manager,
            &mut self.controller,
            &input,
            &mut self.cues,
            0.0,
        )
        .perform(kind, activate, force)
    }

    fn spindash(&self) -> &Spindash {
        self.manager.get::<Spindash>().expect("spindash registered")
    }

    fn charge(&self) -> f32 {
        self.spindash().current_charge_power()
    }

    /// Crouch, then start charging with one press of the charge button.
    fn start_spindash(&mut self, dt: f32) {
        self.tick(&InputSnapshot::default().hold("Down"), dt);
        self.tick(&InputSnapshot::default().hold("Down").press("Jump"), dt);
    }

    fn played_pitches(&self) -> Vec<f32> {
        self.cues
            .iter()
            .filter_map(|cue| match cue {
                CueCommand::Play { pitch, .. } => Some(*pitch),
                CueCommand::Stop { .. } => None,
            })
            .collect()
    }
}

fn crouch_charging() -> InputSnapshot {
    InputSnapshot::default().hold("Down").hold("Jump")
}

fn crouch_press() -> InputSnapshot {
    InputSnapshot::default().hold("Down").press("Jump")
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// -----------------------------------------------------------------------------
// Test move for observing the lifecycle
// -----------------------------------------------------------------------------

#[derive(Debug)]
struct Probe {
    kind: MoveKind,
    wants_start: bool,
    wants_end: bool,
    enters: u32,
    updates: u32,
    exits: u32,
    previous: Option<MoveState>,
    self_perform: Option<bool>,
    perform_self_on_enter: bool,
}

impl Probe {
    fn new(kind: MoveKind) -> Self {
        Self {
            kind,
            wants_start: false,
            wants_end: false,
            enters: 0,
            updates: 0,
            exits: 0,
            previous: None,
            self_perform: None,
            perform_self_on_enter: false,
        }
    }
}

impl Move for Probe {
    fn kind(&self) -> MoveKind {
        self.kind
    }

    fn should_perform(&self, _ctx: &MoveContext) -> bool {
        self.wants_start
    }

    fn should_end(&self, _ctx: &MoveContext) -> bool {
        self.wants_end
    }

    fn on_active_enter(&mut self, previous: MoveState, ctx: &mut MoveContext) {
        self.enters += 1;
        self.previous = Some(previous);
        if self.perform_self_on_enter {
            self.self_perform = Some(ctx.perform(self.kind, false, true));
        }
    }

    fn on_active_update(&mut self, _ctx: &mut MoveContext) {
        self.updates += 1;
    }

    fn on_active_exit(&mut self, _ctx: &mut MoveContext) {
        self.exits += 1;
    }
}

// -----------------------------------------------------------------------------
// MoveManager tests
// -----------------------------------------------------------------------------

#[test]
fn test_registration_order_and_duplicates() {
    let mut manager = standard_moveset(&MovesetFile::default());
    assert_eq!(
        manager.kinds().collect::<Vec<_>>(),
        vec![MoveKind::Duck, MoveKind::Spindash, MoveKind::Roll]
    );

    assert!(!manager.register(Duck::default()));
    assert_eq!(manager.kinds().count(), 3);
}

#[test]
fn test_state_of_unregistered_kind_is_none() {
    let manager = MoveManager::new().with(Duck::default());
    assert_eq!(manager.state(MoveKind::Duck), Some(MoveState::Inactive));
    assert_eq!(manager.state(MoveKind::Roll), None);
    assert!(!manager.is_active(MoveKind::Roll));
}

#[test]
fn test_typed_access() {
    let mut manager = standard_moveset(&MovesetFile::default());
    assert!(manager.get::<Roll>().is_some());
    manager.get_mut::<Duck>().expect("duck registered").config.max_speed = 2.0;
    assert_eq!(manager.get::<Duck>().map(|d| d.config.max_speed), Some(2.0));
    assert!(MoveManager::new().get::<Spindash>().is_none());
}

#[test]
fn test_entry_runs_update_in_same_tick_without_exit() {
    let mut probe = Probe::new(MoveKind::Duck);
    probe.wants_start = true;
    probe.wants_end = true;
    let mut rig = Rig::with_manager(MoveManager::new().with(probe));
    let input = InputSnapshot::default();

    rig.tick(&input, DT);
    let probe = rig.manager.get::<Probe>().expect("probe registered");
    assert_eq!((probe.enters, probe.updates, probe.exits), (1, 1, 0));
    assert_eq!(probe.previous, Some(MoveState::Inactive));
    assert!(rig.manager.is_active(MoveKind::Duck));

    rig.tick(&input, DT);
    let probe = rig.manager.get::<Probe>().expect("probe registered");
    assert_eq!((probe.enters, probe.updates, probe.exits), (1, 2, 1));
    assert!(!rig.manager.is_active(MoveKind::Duck));
}

#[test]
fn test_active_move_updates_once_per_tick() {
    let mut probe = Probe::new(MoveKind::Roll);
    probe.wants_start = true;
    let mut rig = Rig::with_manager(MoveManager::new().with(probe));
    let input = InputSnapshot::default();

    for _ in 0..5 {
        rig.tick(&input, DT);
    }

    let probe = rig.manager.get::<Probe>().expect("probe registered");
    assert_eq!((probe.enters, probe.updates, probe.exits), (1, 5, 0));
}

#[test]
fn test_perform_unknown_kind_returns_false() {
    let mut rig = Rig::with_manager(MoveManager::new().with(Duck::default()));
    assert!(!rig.perform(MoveKind::Roll, true, true));
    assert!(!rig.perform(MoveKind::Spindash, false, false));
}

#[test]
fn test_perform_force_bypasses_should_perform() {
    let mut rig = Rig::with_manager(MoveManager::new().with(Probe::new(MoveKind::Roll)));
    assert!(!rig.perform(MoveKind::Roll, true, false));
    assert!(rig.perform(MoveKind::Roll, true, true));
    assert!(rig.manager.is_active(MoveKind::Roll));

    // Already active: no second entry
    assert!(!rig.perform(MoveKind::Roll, true, true));
    let probe = rig.manager.get::<Probe>().expect("probe registered");
    assert_eq!(probe.enters, 1);
}

#[test]
fn test_perform_deactivate() {
    let mut rig = Rig::with_manager(MoveManager::new().with(Probe::new(MoveKind::Roll)));
    assert!(rig.perform(MoveKind::Roll, true, true));

    // The probe does not want to end, so only a forced request succeeds
    assert!(!rig.perform(MoveKind::Roll, false, false));
    assert!(rig.perform(MoveKind::Roll, false, true));
    assert!(!rig.manager.is_active(MoveKind::Roll));
    assert_eq!(rig.manager.get::<Probe>().map(|p| p.exits), Some(1));
}

#[test]
fn test_perform_on_own_kind_is_rejected() {
    let mut probe = Probe::new(MoveKind::Duck);
    probe.perform_self_on_enter = true;
    let mut rig = Rig::with_manager(MoveManager::new().with(probe));

    assert!(rig.perform(MoveKind::Duck, true, true));
    let probe = rig.manager.get::<Probe>().expect("probe registered");
    assert_eq!(probe.self_perform, Some(false));
    assert!(rig.manager.is_active(MoveKind::Duck));
}

// -----------------------------------------------------------------------------
// Duck and Roll tests
// -----------------------------------------------------------------------------

#[test]
fn test_duck_requires_ground() {
    let mut rig = Rig::new();
    rig.controller.grounded = false;
    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    assert!(!rig.manager.is_active(MoveKind::Duck));

    rig.controller.grounded = true;
    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    assert!(rig.manager.is_active(MoveKind::Duck));
    assert!(rig.manager.locks_control());

    rig.tick(&InputSnapshot::default(), DT);
    assert!(!rig.manager.is_active(MoveKind::Duck));
    assert!(!rig.manager.locks_control());
}

#[test]
fn test_down_at_speed_rolls_instead_of_ducking() {
    let mut rig = Rig::new();
    rig.controller.add_ground_velocity(3.0);

    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    assert!(!rig.manager.is_active(MoveKind::Duck));
    assert!(rig.manager.is_active(MoveKind::Roll));
}

#[test]
fn test_roll_slows_down_and_ends() {
    let mut rig = Rig::new();
    rig.controller.add_ground_velocity(1.0);
    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    assert!(rig.manager.is_active(MoveKind::Roll));

    for _ in 0..120 {
        rig.tick(&InputSnapshot::default(), DT);
    }

    assert!(!rig.manager.is_active(MoveKind::Roll));
    assert!(rig.controller.ground_velocity() < 1.0);
    assert!(rig.controller.ground_velocity() >= 0.0);
}

// -----------------------------------------------------------------------------
// Spindash tests
// -----------------------------------------------------------------------------

#[test]
fn test_spindash_unavailable_without_duck() {
    let mut rig = Rig::new();
    rig.tick(&InputSnapshot::default().press("Jump"), DT);
    assert!(!rig.manager.is_active(MoveKind::Spindash));

    assert!(!rig.perform(MoveKind::Spindash, true, false));
    assert!(!rig.manager.is_active(MoveKind::Spindash));
}

#[test]
fn test_spindash_starts_from_crouch_and_charges_on_press() {
    let mut rig = Rig::new();
    rig.start_spindash(DT);

    assert!(rig.manager.is_active(MoveKind::Duck));
    assert!(rig.manager.is_active(MoveKind::Spindash));
    assert!(approx(rig.charge(), 0.6));
}

#[test]
fn test_spindash_held_button_does_not_charge() {
    let mut rig = Rig::new();
    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    rig.tick(&crouch_charging(), DT);

    assert!(rig.manager.is_active(MoveKind::Spindash));
    assert_eq!(rig.charge(), 0.0);
}

#[test]
fn test_charge_decays_monotonically() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);
    rig.tick(&crouch_press(), 0.0);
    rig.tick(&crouch_press(), 0.0);

    let mut previous = rig.charge();
    assert!(previous > 0.0);
    for dt in [DT, 0.05, DT, 0.1, 0.25, DT] {
        rig.tick(&crouch_charging(), dt);
        let current = rig.charge();
        assert!(current < previous);
        assert!(current >= 0.0);
        previous = current;
    }
}

#[test]
fn test_charge_decay_floors_at_zero_for_large_steps() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);

    // decay * dt > 1 would overshoot below zero without the floor
    rig.tick(&crouch_charging(), 2.0);
    assert_eq!(rig.charge(), 0.0);

    rig.tick(&crouch_charging(), DT);
    assert_eq!(rig.charge(), 0.0);
}

#[test]
fn test_charge_is_clamped_to_max() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);

    for _ in 0..10 {
        rig.tick(&crouch_press(), 0.0);
        assert!(rig.charge() <= 2.4 + 1e-6);
    }
    assert!(approx(rig.charge(), 2.4));
}

#[test]
fn test_reentry_resets_charge_once() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);
    rig.tick(&crouch_press(), 0.0);
    assert!(approx(rig.charge(), 1.2));

    // A forced re-entry while active is refused and keeps the charge
    assert!(!rig.perform(MoveKind::Spindash, true, true));
    assert!(approx(rig.charge(), 1.2));

    // Release, stop rolling, then crouch and hold charge again
    rig.tick(&InputSnapshot::default(), 0.0);
    assert!(!rig.manager.is_active(MoveKind::Spindash));
    rig.controller.brake(100.0);
    rig.tick(&InputSnapshot::default(), DT);
    assert!(!rig.manager.is_active(MoveKind::Roll));

    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    rig.tick(&crouch_charging(), DT);
    assert!(rig.manager.is_active(MoveKind::Spindash));
    assert_eq!(rig.charge(), 0.0);
}

#[test]
fn test_release_facing_forward_adds_base_plus_charge() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);
    rig.tick(&crouch_press(), 0.0);
    assert!(approx(rig.charge(), 1.2));

    rig.tick(&InputSnapshot::default(), 0.0);

    assert!(!rig.manager.is_active(MoveKind::Duck));
    assert!(!rig.manager.is_active(MoveKind::Spindash));
    assert!(approx(rig.controller.ground_velocity(), 6.0));
}

#[test]
fn test_release_facing_backward_subtracts_base_plus_charge() {
    let mut rig = Rig::new();
    rig.controller.facing_forward = false;
    rig.controller.add_ground_velocity(0.25);
    rig.start_spindash(0.0);
    rig.tick(&crouch_press(), 0.0);

    rig.tick(&InputSnapshot::default(), 0.0);

    assert!(approx(rig.controller.ground_velocity(), 0.25 - 6.0));
}

#[test]
fn test_release_forces_roll() {
    let mut rig = Rig::new();
    rig.start_spindash(DT);

    // Nothing held, so the roll's own start condition is false
    rig.tick(&InputSnapshot::default(), DT);

    assert!(rig.manager.is_active(MoveKind::Roll));
    assert!(rig.manager.locks_control());
}

#[test]
fn test_leaving_ground_releases_spindash() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);

    rig.controller.grounded = false;
    rig.tick(&crouch_charging(), 0.0);

    assert!(!rig.manager.is_active(MoveKind::Duck));
    assert!(!rig.manager.is_active(MoveKind::Spindash));
    assert!(approx(rig.controller.ground_velocity(), 4.8 + 0.6));
}

#[test]
fn test_release_without_roll_registered_still_launches() {
    let moveset = MovesetFile::default();
    let manager = MoveManager::new()
        .with(Duck::new(moveset.duck.clone()))
        .with(Spindash::new(moveset.spindash.clone()));
    let mut rig = Rig::with_manager(manager);
    rig.start_spindash(0.0);

    rig.tick(&InputSnapshot::default(), 0.0);

    assert!(!rig.manager.is_active(MoveKind::Spindash));
    assert!(approx(rig.controller.ground_velocity(), 5.4));
}

#[test]
fn test_charge_pitch_steps_and_clamps() {
    let mut rig = Rig::with_charge_sound();
    rig.tick(&InputSnapshot::default().hold("Down"), DT);
    rig.tick(&crouch_charging(), DT);
    for dt in [DT, 0.5, 0.01, 1.0, DT] {
        rig.tick(&crouch_press(), dt);
    }

    // Entry plays at the minimum, then each charge adds (1.5 - 1.0) / 4
    let pitches = rig.played_pitches();
    let expected = [1.0, 1.125, 1.25, 1.375, 1.5, 1.5];
    assert_eq!(pitches.len(), expected.len());
    for (pitch, want) in pitches.iter().zip(expected) {
        assert!(approx(*pitch, want));
    }
    assert!(approx(rig.spindash().charge_pitch(), 1.5));
}

#[test]
fn test_release_stops_charge_cue() {
    let mut rig = Rig::with_charge_sound();
    rig.start_spindash(DT);
    rig.tick(&InputSnapshot::default(), DT);

    assert_eq!(
        rig.cues.last(),
        Some(&CueCommand::Stop {
            channel: Spindash::CHARGE_CHANNEL.to_string()
        })
    );
}

#[test]
fn test_no_charge_sound_emits_no_cues() {
    let mut rig = Rig::new();
    rig.start_spindash(DT);
    rig.tick(&crouch_press(), DT);
    rig.tick(&InputSnapshot::default(), DT);

    assert!(rig.cues.is_empty());
}

#[test]
fn test_zero_pitch_steps_jumps_to_max() {
    let mut spindash = Spindash::new(SpindashConfig {
        charge_sound: Some("audio/charge.ogg".to_string()),
        charge_pitch_steps: 0,
        ..SpindashConfig::default()
    });
    let mut manager = MoveManager::new();
    let mut controller = HedgehogController::default();
    let input = InputSnapshot::default();
    let mut cues = Vec::new();
    let mut ctx = MoveContext::new(&mut manager, &mut controller, &input, &mut cues, 0.0);

    spindash.charge(&mut ctx);

    assert_eq!(spindash.charge_pitch(), spindash.config.charge_pitch_max);
    assert!(spindash.charge_pitch().is_finite());
}

#[test]
fn test_hot_edit_keeps_runtime_charge() {
    let mut rig = Rig::new();
    rig.start_spindash(0.0);

    let mut moveset = MovesetFile::default();
    moveset.spindash.base_power = 8.0;
    apply_moveset(&mut rig.manager, &moveset);

    assert!(approx(rig.charge(), 0.6));
    rig.tick(&InputSnapshot::default(), 0.0);
    assert!(approx(rig.controller.ground_velocity(), 8.6));
}

// =============================================================================
// Capability gating
// =============================================================================

/// An app running object commands and then the move tick, with one grounded
/// player moving at `speed` while "Down" is held.
fn gated_app(speed: f32) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<PrefabLibrary>()
        .insert_resource(InputSnapshot::default().hold("Down"))
        .add_message::<SoundCommand>()
        .add_message::<ObjectCommand>()
        .add_systems(Update, (apply_object_commands, tick_moves).chain());

    let mut controller = HedgehogController::default();
    controller.grounded = true;
    controller.add_ground_velocity(speed);
    let player = app
        .world_mut()
        .spawn((
            standard_moveset(&MovesetFile::default()),
            controller,
            Capabilities::new().with(MOVE_MANAGER_CAPABILITY, true),
            Transform::default(),
        ))
        .id();
    (app, player)
}

fn toggle_moves(app: &mut App, player: Entity, enabled: bool) {
    let name = MOVE_MANAGER_CAPABILITY.to_string();
    let action = if enabled {
        ObjectAction::EnableCapability(name)
    } else {
        ObjectAction::DisableCapability(name)
    };
    app.world_mut().write_message(ObjectCommand {
        emitter: player,
        action,
    });
}

fn manager(app: &App, player: Entity) -> &MoveManager {
    app.world().get::<MoveManager>(player).expect("player has moves")
}

fn controller(app: &App, player: Entity) -> &HedgehogController {
    app.world()
        .get::<HedgehogController>(player)
        .expect("player has a controller")
}

#[test]
fn test_disabled_capability_skips_move_tick() {
    let (mut app, player) = gated_app(3.0);
    toggle_moves(&mut app, player, false);
    app.update();

    assert!(manager(&app, player).active_kinds().next().is_none());
    assert_eq!(manager(&app, player).state(MoveKind::Roll), Some(MoveState::Inactive));
    assert_eq!(controller(&app, player).ground_velocity(), 3.0);

    toggle_moves(&mut app, player, true);
    app.update();
    assert!(manager(&app, player).is_active(MoveKind::Roll));
}

#[test]
fn test_disabling_moves_releases_control_lock() {
    let (mut app, player) = gated_app(0.0);
    app.update();
    assert!(manager(&app, player).is_active(MoveKind::Duck));
    assert!(controller(&app, player).control_locked);

    toggle_moves(&mut app, player, false);
    app.update();

    // Move state is frozen as it was, but the player is free to move again
    assert!(manager(&app, player).is_active(MoveKind::Duck));
    assert!(!controller(&app, player).control_locked);
}
