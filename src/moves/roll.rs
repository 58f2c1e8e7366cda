//! Moves domain: rolling along the ground.

use crate::content::RollConfig;
use crate::moves::{Move, MoveContext, MoveKind};

/// Ball form on the ground. Started from input at speed, or handed over by
/// a released spindash; ends when too slow or airborne.
#[derive(Debug, Clone, Default)]
pub struct Roll {
    pub config: RollConfig,
}

impl Roll {
    pub fn new(config: RollConfig) -> Self {
        Self { config }
    }
}

impl Move for Roll {
    fn kind(&self) -> MoveKind {
        MoveKind::Roll
    }

    fn available(&self, ctx: &MoveContext) -> bool {
        ctx.controller.grounded
    }

    fn should_perform(&self, ctx: &MoveContext) -> bool {
        ctx.input.is_held(&self.config.button)
            && ctx.controller.ground_velocity().abs() >= self.config.min_start_speed
    }

    fn should_end(&self, ctx: &MoveContext) -> bool {
        ctx.controller.ground_velocity().abs() < self.config.stop_speed
    }

    fn on_active_update(&mut self, ctx: &mut MoveContext) {
        ctx.controller.brake(self.config.friction * ctx.dt);
    }

    fn locks_control(&self) -> bool {
        true
    }
}
