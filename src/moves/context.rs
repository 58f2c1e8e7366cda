//! Moves domain: the per-tick view a move works through, and the activation
//! protocol.

use bevy::prelude::*;

use crate::effects::CueCommand;
use crate::movement::{HedgehogController, InputSnapshot};
use crate::moves::{Move, MoveKind, MoveManager, MoveState};

/// Everything a move may read or touch during one tick.
///
/// While one of a move's methods runs, that move is lifted out of the
/// manager. Requests it makes against its own kind are therefore rejected,
/// and hooks on other moves can run nested inside its own.
pub struct MoveContext<'a> {
    manager: &'a mut MoveManager,
    pub controller: &'a mut HedgehogController,
    pub input: &'a InputSnapshot,
    /// Sound cues requested this tick, flushed to the emitting entity afterwards.
    pub cues: &'a mut Vec<CueCommand>,
    /// Seconds since the previous tick.
    pub dt: f32,
}

impl<'a> MoveContext<'a> {
    pub fn new(
        manager: &'a mut MoveManager,
        controller: &'a mut HedgehogController,
        input: &'a InputSnapshot,
        cues: &'a mut Vec<CueCommand>,
        dt: f32,
    ) -> Self {
        Self {
            manager,
            controller,
            input,
            cues,
            dt,
        }
    }

    pub fn is_active(&self, kind: MoveKind) -> bool {
        self.manager.is_active(kind)
    }

    /// Runs one simulation tick over every registered move, in registration
    /// order.
    pub fn tick(&mut self) {
        self.manager.tick += 1;
        for index in 0..self.manager.slots.len() {
            self.step(index);
        }
    }

    /// Asks for a move to be activated or deactivated right now.
    ///
    /// Without `force`, activation needs `available && should_perform` and
    /// deactivation needs `should_end || !available`; a move that already
    /// transitioned this tick is refused. With `force` the move's own gates
    /// are skipped. Returns false for unregistered kinds, for a move whose own
    /// code is making the request, and when the move is already in the
    /// requested state.
    pub fn perform(&mut self, kind: MoveKind, activate: bool, force: bool) -> bool {
        let Some(index) = self.manager.slot_index(kind) else {
            debug!("Perform {} ignored: move not registered", kind);
            return false;
        };
        let Some(mut mv) = self.manager.slots[index].mv.take() else {
            debug!("Perform {} ignored: move is busy", kind);
            return false;
        };

        let slot = &self.manager.slots[index];
        let settled = slot.last_transition == Some(self.manager.tick);
        let state = slot.state;
        let accepted = match (activate, state) {
            (true, MoveState::Inactive) => {
                force || (!settled && mv.available(self) && mv.should_perform(self))
            }
            (false, MoveState::Active) => {
                force || (!settled && (mv.should_end(self) || !mv.available(self)))
            }
            _ => false,
        };

        if accepted {
            if activate {
                self.enter(index, &mut *mv);
            } else {
                self.exit(index, &mut *mv);
            }
        }

        self.manager.slots[index].mv = Some(mv);
        accepted
    }

    fn step(&mut self, index: usize) {
        let Some(mut mv) = self.manager.slots[index].mv.take() else {
            return;
        };

        let tick = self.manager.tick;
        let slot = &self.manager.slots[index];
        let settled = slot.last_transition == Some(tick);
        let state = slot.state;

        match state {
            MoveState::Inactive => {
                if !settled && mv.available(self) && mv.should_perform(self) {
                    self.enter(index, &mut *mv);
                    self.update(index, &mut *mv);
                }
            }
            MoveState::Active => {
                self.update(index, &mut *mv);
                // A move forced active earlier this tick keeps running until the next one
                if !settled && (mv.should_end(self) || !mv.available(self)) {
                    self.exit(index, &mut *mv);
                }
            }
        }

        self.manager.slots[index].mv = Some(mv);
    }

    fn enter(&mut self, index: usize, mv: &mut dyn Move) {
        let tick = self.manager.tick;
        let slot = &mut self.manager.slots[index];
        let previous = slot.state;
        slot.state = MoveState::Active;
        slot.last_transition = Some(tick);
        debug!("Move {} entered (tick {})", slot.kind, tick);

        mv.on_active_enter(previous, self);
    }

    fn update(&mut self, index: usize, mv: &mut dyn Move) {
        let tick = self.manager.tick;
        let slot = &mut self.manager.slots[index];
        if slot.last_update == Some(tick) || slot.state != MoveState::Active {
            return;
        }
        slot.last_update = Some(tick);

        mv.on_active_update(self);
    }

    fn exit(&mut self, index: usize, mv: &mut dyn Move) {
        let tick = self.manager.tick;
        let slot = &mut self.manager.slots[index];
        slot.state = MoveState::Inactive;
        slot.last_transition = Some(tick);
        debug!("Move {} exited (tick {})", slot.kind, tick);

        mv.on_active_exit(self);
    }
}
