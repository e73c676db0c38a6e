//! Game definition: validated parameters and the static facts derived
//! from them.

use std::sync::Arc;

use tracing::debug;

use super::engine::Game;
use super::state::QwintoState;
use crate::board::{max_score, BOARD_SLOTS, CELLS, MAX_OUTCOME, ROWS};
use crate::core::{EngineError, GameParams};
use crate::rules::chance;

/// Values before the per-player blocks of the observation: phase (3),
/// selected dice (one per color) and the dice outcome (1-18).
const OBSERVATION_FIXED: usize = 3 + ROWS + MAX_OUTCOME as usize;

/// A configured game. Immutable; shared by every state created from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QwintoGame {
    params: GameParams,
}

impl QwintoGame {
    /// Create a game from validated parameters.
    pub fn new(params: GameParams) -> Result<Arc<Self>, EngineError> {
        params.validate()?;
        debug!(players = params.players, row_rule = ?params.row_rule, "created game");
        Ok(Arc::new(Self { params }))
    }

    /// Standard game for `players` players.
    pub fn with_players(players: usize) -> Result<Arc<Self>, EngineError> {
        Self::new(GameParams::new(players))
    }

    /// The game parameters.
    #[must_use]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Values in the one-hot roll counter (counts 0 through `max_rolls`).
    #[must_use]
    pub fn roll_encoding_size(&self) -> usize {
        usize::from(self.params.max_rolls) + 1
    }
}

impl Game for QwintoGame {
    type State = QwintoState;

    fn new_initial_state(self: &Arc<Self>) -> QwintoState {
        QwintoState::new(Arc::clone(self))
    }

    fn num_players(&self) -> usize {
        self.params.players
    }

    fn num_distinct_actions(&self) -> usize {
        // Cells, miss, skip.
        CELLS + 2
    }

    fn max_chance_outcomes(&self) -> usize {
        chance::sum_counts(ROWS as u32).len()
    }

    fn min_utility(&self) -> f64 {
        // The losing miss can overshoot a threshold that is not a multiple
        // of the miss penalty.
        let misses = self.params.misses_to_terminate() as i32;
        f64::from(misses * self.params.miss_points)
    }

    fn max_utility(&self) -> f64 {
        f64::from(max_score())
    }

    fn observation_tensor_shape(&self) -> Vec<usize> {
        let players = self.params.players;
        vec![OBSERVATION_FIXED + self.roll_encoding_size() + players + players * BOARD_SLOTS]
    }

    fn max_game_length(&self) -> usize {
        // Each turn the active player writes a cell or misses, so a player
        // has at most CELLS writes plus the misses short of termination.
        let misses = self.params.misses_to_terminate() as usize;
        let turns = self.params.players * (CELLS + misses - 1) + 1;
        // Select, up to max_rolls rolls each followed by a decision, submit.
        let moves_per_turn = 2 + 2 * usize::from(self.params.max_rolls);
        turns * moves_per_turn
    }
}
