//! Moves domain: move kind tags and the two-state lifecycle.

use std::fmt;

/// Registry key for a move. A manager holds at most one move of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Duck,
    Roll,
    Spindash,
}

impl MoveKind {
    pub fn name(self) -> &'static str {
        match self {
            MoveKind::Duck => "Duck",
            MoveKind::Roll => "Roll",
            MoveKind::Spindash => "Spindash",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveState {
    #[default]
    Inactive,
    Active,
}
