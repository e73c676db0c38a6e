//! Game parameters.
//!
//! `GameParams` carries everything a caller may configure about a game.
//! Every field has a default, so a partial JSON/YAML document or
//! `GameParams::default()` describes a valid standard game:
//!
//! ```
//! use qwinto::core::GameParams;
//!
//! let params = GameParams::new(3).with_max_rolls(3);
//! assert_eq!(params.players, 3);
//! assert_eq!(params.miss_points, -5);
//! assert!(params.validate().is_ok());
//! ```
//!
//! The board geometry is not configurable; see `board::geometry`.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 1;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 10;

/// Default penalty written to the miss slot per miss.
pub const DEFAULT_MISS_POINTS: i32 = -5;

/// Default miss total at which the game ends.
pub const DEFAULT_TERMINATION_POINTS: i32 = -20;

/// Default number of rolls per turn (the first roll plus one re-roll).
pub const DEFAULT_MAX_ROLLS: u8 = 2;

/// How empty cells to the left of a target cell are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowRule {
    /// Every cell left of the target must already hold a smaller value.
    #[default]
    Contiguous,
    /// Cells left of the target may be empty; filled ones must be smaller.
    Gapped,
}

/// Complete game parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    /// Number of players (1-10).
    pub players: usize,

    /// Penalty added to the miss slot per miss. Negative.
    pub miss_points: i32,

    /// The game ends once any miss slot is at or below this. Negative.
    pub termination_points: i32,

    /// Rolls allowed per turn, counting the first.
    pub max_rolls: u8,

    /// Row ordering rule.
    pub row_rule: RowRule,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            miss_points: DEFAULT_MISS_POINTS,
            termination_points: DEFAULT_TERMINATION_POINTS,
            max_rolls: DEFAULT_MAX_ROLLS,
            row_rule: RowRule::default(),
        }
    }
}

impl GameParams {
    /// Default parameters for `players` players.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// Set the miss penalty.
    #[must_use]
    pub fn with_miss_points(mut self, points: i32) -> Self {
        self.miss_points = points;
        self
    }

    /// Set the termination threshold.
    #[must_use]
    pub fn with_termination_points(mut self, points: i32) -> Self {
        self.termination_points = points;
        self
    }

    /// Set the number of rolls per turn.
    #[must_use]
    pub fn with_max_rolls(mut self, rolls: u8) -> Self {
        self.max_rolls = rolls;
        self
    }

    /// Set the row ordering rule.
    #[must_use]
    pub fn with_row_rule(mut self, rule: RowRule) -> Self {
        self.row_rule = rule;
        self
    }

    /// Check the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(EngineError::InvalidPlayerCount {
                count: self.players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.miss_points >= 0 {
            return Err(EngineError::InvalidParams {
                name: "miss_points",
                reason: "must be negative",
            });
        }
        if self.termination_points >= 0 {
            return Err(EngineError::InvalidParams {
                name: "termination_points",
                reason: "must be negative",
            });
        }
        if self.max_rolls == 0 {
            return Err(EngineError::InvalidParams {
                name: "max_rolls",
                reason: "must allow at least one roll",
            });
        }
        Ok(())
    }

    /// Misses a single player can take before the game ends.
    #[must_use]
    pub fn misses_to_terminate(&self) -> u32 {
        // Ceiling division of two negatives.
        let threshold = self.termination_points.unsigned_abs();
        let step = self.miss_points.unsigned_abs();
        threshold.div_ceil(step)
    }
}
