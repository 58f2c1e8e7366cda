//! Moves domain: crouching in place.

use crate::content::DuckConfig;
use crate::moves::{Move, MoveContext, MoveKind};

/// Crouch while the duck button is held on the ground at low speed.
#[derive(Debug, Clone, Default)]
pub struct Duck {
    pub config: DuckConfig,
}

impl Duck {
    pub fn new(config: DuckConfig) -> Self {
        Self { config }
    }
}

impl Move for Duck {
    fn kind(&self) -> MoveKind {
        MoveKind::Duck
    }

    fn available(&self, ctx: &MoveContext) -> bool {
        ctx.controller.grounded
            && !ctx.is_active(MoveKind::Roll)
            && ctx.controller.ground_velocity().abs() <= self.config.max_speed
    }

    fn should_perform(&self, ctx: &MoveContext) -> bool {
        ctx.input.is_held(&self.config.button)
    }

    fn should_end(&self, ctx: &MoveContext) -> bool {
        !ctx.input.is_held(&self.config.button)
    }

    fn locks_control(&self) -> bool {
        true
    }
}
