//! Moves domain: the contract every move implements.

use std::any::Any;
use std::fmt::Debug;

use crate::moves::{MoveContext, MoveKind, MoveState};

/// A discrete player ability driven by the [`MoveManager`](crate::moves::MoveManager).
///
/// Each tick the manager asks the predicates whether the move may start or
/// must stop, and calls the hooks on every transition. Predicates must not
/// have side effects; hooks must not fail. A move that cannot do its work
/// (a missing clip, say) skips that part and carries on.
pub trait Move: Any + Debug + Send + Sync {
    fn kind(&self) -> MoveKind;

    /// External preconditions for this move to be considered at all.
    fn available(&self, _ctx: &MoveContext) -> bool {
        true
    }

    /// Whether the move wants to start this tick. Only consulted while inactive.
    fn should_perform(&self, _ctx: &MoveContext) -> bool {
        false
    }

    /// Whether the move wants to stop this tick. Only consulted while active.
    fn should_end(&self, _ctx: &MoveContext) -> bool {
        false
    }

    /// Called once on the inactive to active transition. Must reset all
    /// per-session state.
    fn on_active_enter(&mut self, _previous: MoveState, _ctx: &mut MoveContext) {}

    /// Called once per tick while active, before the exit check.
    fn on_active_update(&mut self, _ctx: &mut MoveContext) {}

    /// Called once on the active to inactive transition.
    fn on_active_exit(&mut self, _ctx: &mut MoveContext) {}

    /// Whether player ground control is suspended while this move is active.
    fn locks_control(&self) -> bool {
        false
    }
}
