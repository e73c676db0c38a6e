//! Action ids and action history.
//!
//! Every decision in the game, whoever makes it, is a single integer id.
//! What the id means depends on the phase:
//! - SelectDice: the dice bitmask (1-7)
//! - RollDice: `REROLL` (0) or accept (any other id, `ACCEPT` by convention)
//! - Chance: the rolled sum (1-18)
//! - SubmitPoints: a board cell (0-26), `MISS` or `SKIP`
//! - Simultaneous node: a flat joint-action id (see `rules::joint`)

use serde::{Deserialize, Serialize};

use super::player::Actor;
use crate::board::CELLS;

/// A game action id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action(pub u64);

impl Action {
    /// Roll the selected dice again.
    pub const REROLL: Action = Action(0);

    /// Keep the current roll and move on to submitting.
    pub const ACCEPT: Action = Action(1);

    /// Take the miss penalty instead of writing a cell (active player only).
    ///
    /// Equal to the index of the miss slot on the board.
    pub const MISS: Action = Action(CELLS as u64);

    /// Write nothing this turn (non-active players only).
    pub const SKIP: Action = Action(CELLS as u64 + 1);

    /// Create a new action id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The board cell this action writes, if it is a cell action.
    #[must_use]
    pub fn cell(self) -> Option<usize> {
        (self.0 < CELLS as u64).then_some(self.0 as usize)
    }
}

impl From<usize> for Action {
    fn from(id: usize) -> Self {
        Action(id as u64)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replaying a game from its initial state
/// - Training data
/// - Debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who took this action.
    pub actor: Actor,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(actor: Actor, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            actor,
            action,
            turn,
            sequence,
        }
    }
}
