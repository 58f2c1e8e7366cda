//! Moves domain: the per-entity move registry.

use bevy::prelude::*;
use std::any::Any;

use crate::moves::{Move, MoveKind, MoveState};

#[derive(Debug)]
pub(crate) struct MoveSlot {
    pub(crate) kind: MoveKind,
    /// `None` while the move's own predicate or hook is running.
    pub(crate) mv: Option<Box<dyn Move>>,
    pub(crate) state: MoveState,
    pub(crate) last_transition: Option<u64>,
    pub(crate) last_update: Option<u64>,
}

/// Owns every move of one entity and records which of them are active.
///
/// Moves are evaluated in registration order. Ticking and activation requests
/// go through a [`MoveContext`](crate::moves::MoveContext), which also carries
/// the controller and input the hooks need.
#[derive(Component, Debug, Default)]
pub struct MoveManager {
    pub(crate) slots: Vec<MoveSlot>,
    pub(crate) tick: u64,
}

impl MoveManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a move after the ones already registered. Returns false, and
    /// drops `mv`, if a move of the same kind is already present.
    pub fn register<M: Move>(&mut self, mv: M) -> bool {
        let kind = mv.kind();
        if self.slot_index(kind).is_some() {
            warn!("Move {} is already registered, ignoring duplicate", kind);
            return false;
        }

        self.slots.push(MoveSlot {
            kind,
            mv: Some(Box::new(mv)),
            state: MoveState::Inactive,
            last_transition: None,
            last_update: None,
        });
        true
    }

    pub fn with<M: Move>(mut self, mv: M) -> Self {
        self.register(mv);
        self
    }

    pub fn is_active(&self, kind: MoveKind) -> bool {
        self.state(kind) == Some(MoveState::Active)
    }

    /// `None` for kinds that were never registered.
    pub fn state(&self, kind: MoveKind) -> Option<MoveState> {
        self.slot_index(kind).map(|index| self.slots[index].state)
    }

    /// Registered kinds, in evaluation order.
    pub fn kinds(&self) -> impl Iterator<Item = MoveKind> + '_ {
        self.slots.iter().map(|slot| slot.kind)
    }

    pub fn active_kinds(&self) -> impl Iterator<Item = MoveKind> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.state == MoveState::Active)
            .map(|slot| slot.kind)
    }

    /// True if any active move holds the controller.
    pub fn locks_control(&self) -> bool {
        self.slots.iter().any(|slot| {
            slot.state == MoveState::Active && slot.mv.as_ref().is_some_and(|mv| mv.locks_control())
        })
    }

    pub fn get<M: Move>(&self) -> Option<&M> {
        self.slots.iter().find_map(|slot| {
            let mv: &dyn Any = slot.mv.as_deref()?;
            mv.downcast_ref::<M>()
        })
    }

    pub fn get_mut<M: Move>(&mut self) -> Option<&mut M> {
        self.slots.iter_mut().find_map(|slot| {
            let mv: &mut dyn Any = slot.mv.as_deref_mut()?;
            mv.downcast_mut::<M>()
        })
    }

    pub(crate) fn slot_index(&self, kind: MoveKind) -> Option<usize> {
        self.slots.iter().position(|slot| slot.kind == kind)
    }
}
