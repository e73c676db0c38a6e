//! Observation encoding.
//!
//! Layout, in order:
//! - phase one-hot (3)
//! - rolls used this turn, one-hot over `0..=max_rolls`
//! - selected dice, one 0/1 flag per color in row order
//! - dice outcome one-hot over 1..=18 (all zero before the first roll)
//! - active player one-hot (one value per player)
//! - every board's raw slots in seat order, miss slot last
//!
//! The board is fully public information, so every player sees the same
//! tensor.

use super::phase::Phase;
use super::state::QwintoState;
use crate::board::{Color, MAX_OUTCOME};

const PHASES: [Phase; 3] = [Phase::SelectDice, Phase::RollDice, Phase::SubmitPoints];

fn push_one_hot(out: &mut Vec<f32>, size: usize, hot: Option<usize>) {
    let start = out.len();
    out.resize(start + size, 0.0);
    if let Some(i) = hot.filter(|&i| i < size) {
        out[start + i] = 1.0;
    }
}

/// Encode `state` into `out`, replacing its contents.
pub(crate) fn encode(state: &QwintoState, out: &mut Vec<f32>) {
    out.clear();
    let turn = state.turn();

    push_one_hot(out, PHASES.len(), PHASES.iter().position(|&p| p == turn.phase));
    push_one_hot(
        out,
        state.game().roll_encoding_size(),
        Some(usize::from(turn.rolls)),
    );
    out.extend(
        Color::ROW_ORDER
            .iter()
            .map(|&c| if turn.dice.contains(c) { 1.0 } else { 0.0 }),
    );
    push_one_hot(
        out,
        usize::from(MAX_OUTCOME),
        usize::from(turn.outcome).checked_sub(1),
    );
    push_one_hot(out, state.player_count(), Some(turn.active_player.index()));

    for board in state.boards().values() {
        out.extend(board.slots().iter().map(|&v| v as f32));
    }
}
