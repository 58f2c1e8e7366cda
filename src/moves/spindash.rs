//! Moves domain: crouch, charge, release.

use crate::content::SpindashConfig;
use crate::effects::CueCommand;
use crate::moves::{Move, MoveContext, MoveKind, MoveState};

/// Charge-and-release dash performed from a crouch.
///
/// Each press of the charge button while ducking adds `charge_power`, and the
/// stored charge decays exponentially between presses. Standing up releases
/// it as ground speed in the facing direction and hands over to a roll.
#[derive(Debug, Clone)]
pub struct Spindash {
    pub config: SpindashConfig,
    current_charge_power: f32,
    charge_pitch: f32,
}

impl Spindash {
    /// Cue channel for the charge sound on the owning entity.
    pub const CHARGE_CHANNEL: &'static str = "spindash_charge";

    pub fn new(config: SpindashConfig) -> Self {
        let charge_pitch = config.charge_pitch_min;
        Self {
            config,
            current_charge_power: 0.0,
            charge_pitch,
        }
    }

    /// Bonus speed stored so far in this session. Stale once released.
    pub fn current_charge_power(&self) -> f32 {
        self.current_charge_power
    }

    /// Pitch the charge cue was last played at.
    pub fn charge_pitch(&self) -> f32 {
        self.charge_pitch
    }

    /// Replaces the authoring values. Runtime charge is left alone.
    pub fn apply_config(&mut self, config: SpindashConfig) {
        self.config = config;
    }

    /// Speed handed to the controller on release.
    pub fn release_power(&self) -> f32 {
        self.config.base_power + self.current_charge_power
    }

    fn pitch_step(&self) -> f32 {
        // Zero steps would divide by zero; treat it as a single jump to max
        let steps = self.config.charge_pitch_steps.max(1) as f32;
        (self.config.charge_pitch_max - self.config.charge_pitch_min) / steps
    }

    /// Adds one charge and retriggers the charge cue one pitch step higher.
    pub fn charge(&mut self, ctx: &mut MoveContext) {
        self.current_charge_power += self.config.charge_power;
        self.charge_pitch = (self.charge_pitch + self.pitch_step()).min(self.config.charge_pitch_max);

        if let Some(clip) = &self.config.charge_sound {
            ctx.cues.push(CueCommand::Play {
                channel: Self::CHARGE_CHANNEL.to_string(),
                clip: clip.clone(),
                pitch: self.charge_pitch,
            });
        }
    }

    /// First-order decay toward zero over `dt` seconds, floored at zero.
    fn decay(&mut self, dt: f32) {
        let decayed =
            self.current_charge_power - self.current_charge_power * self.config.charge_power_decay * dt;
        self.current_charge_power = decayed.max(0.0);
    }
}

impl Default for Spindash {
    fn default() -> Self {
        Self::new(SpindashConfig::default())
    }
}

impl Move for Spindash {
    fn kind(&self) -> MoveKind {
        MoveKind::Spindash
    }

    fn available(&self, ctx: &MoveContext) -> bool {
        ctx.is_active(MoveKind::Duck)
    }

    fn should_perform(&self, ctx: &MoveContext) -> bool {
        ctx.input.is_held(&self.config.charge_button)
    }

    fn should_end(&self, ctx: &MoveContext) -> bool {
        !ctx.is_active(MoveKind::Duck)
    }

    fn on_active_enter(&mut self, _previous: MoveState, ctx: &mut MoveContext) {
        self.current_charge_power = 0.0;
        self.charge_pitch = self.config.charge_pitch_min;

        if let Some(clip) = &self.config.charge_sound {
            ctx.cues.push(CueCommand::Play {
                channel: Self::CHARGE_CHANNEL.to_string(),
                clip: clip.clone(),
                pitch: self.charge_pitch,
            });
        }
    }

    fn on_active_update(&mut self, ctx: &mut MoveContext) {
        self.decay(ctx.dt);

        if ctx.input.was_pressed(&self.config.charge_button) {
            self.charge(ctx);
        }

        if self.current_charge_power > self.config.max_charge_power {
            self.current_charge_power = self.config.max_charge_power;
        }
    }

    fn on_active_exit(&mut self, ctx: &mut MoveContext) {
        let power = self.release_power();
        let sign = ctx.controller.facing_sign();
        ctx.controller.add_ground_velocity(sign * power);

        ctx.perform(MoveKind::Roll, true, true);

        if self.config.charge_sound.is_some() {
            ctx.cues.push(CueCommand::Stop {
                channel: Self::CHARGE_CHANNEL.to_string(),
            });
        }
    }

    fn locks_control(&self) -> bool {
        true
    }
}
