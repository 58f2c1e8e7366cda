//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Ground-relative physics state shared by every move of one entity.
///
/// Moves read `facing_forward` and push `ground_velocity` up or down through
/// [`HedgehogController::add_ground_velocity`]; they never set it outright.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct HedgehogController {
    ground_velocity: f32,
    pub facing_forward: bool,
    pub grounded: bool,
    /// Set while an active move owns horizontal control.
    pub control_locked: bool,
}

impl Default for HedgehogController {
    fn default() -> Self {
        Self {
            ground_velocity: 0.0,
            facing_forward: true,
            grounded: false,
            control_locked: false,
        }
    }
}

impl HedgehogController {
    /// Signed speed along the ground, in units per second. Positive is rightward.
    pub fn ground_velocity(&self) -> f32 {
        self.ground_velocity
    }

    pub fn add_ground_velocity(&mut self, delta: f32) {
        self.ground_velocity += delta;
    }

    /// Moves `ground_velocity` toward zero by at most `amount`.
    pub fn brake(&mut self, amount: f32) {
        let step = amount.max(0.0).min(self.ground_velocity.abs());
        self.ground_velocity -= step * self.ground_velocity.signum();
    }

    /// Direction sign derived from facing: 1.0 forward, -1.0 backward.
    pub fn facing_sign(&self) -> f32 {
        if self.facing_forward { 1.0 } else { -1.0 }
    }

    /// Stops ground motion after running into a wall.
    pub(crate) fn halt(&mut self) {
        self.ground_velocity = 0.0;
    }
}
