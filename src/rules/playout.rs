//! Random playouts.
//!
//! Plays uniformly random legal actions (and weighted chance outcomes)
//! until the game ends. Used by tests, benches and as a smoke test for
//! new parameter sets.

use tracing::debug;

use super::engine::State;
use crate::core::{Actor, EngineError, GameRng, PlayerId};

/// Play `state` forward with random actions.
///
/// Stops at a terminal state or after `max_moves` applied actions
/// (0 = no limit) and returns `state.returns()`, which is all zeros if the
/// limit was hit first.
pub fn random_playout<S: State>(
    state: &mut S,
    rng: &mut GameRng,
    max_moves: usize,
) -> Result<Vec<f64>, EngineError> {
    let mut moves = 0;

    while !state.is_terminal() {
        if max_moves > 0 && moves >= max_moves {
            debug!(moves, "playout stopped at move limit");
            break;
        }

        match state.current_player() {
            Actor::Chance => {
                let outcomes = state.chance_outcomes()?;
                let Some(action) = rng.sample_outcome(&outcomes) else {
                    break;
                };
                state.apply_action(action)?;
            }
            Actor::Simultaneous => {
                let mut joint = Vec::with_capacity(state.num_players());
                for player in PlayerId::all(state.num_players()) {
                    let legal = state.legal_actions(Actor::Player(player))?;
                    let Some(&action) = rng.choose(&legal) else {
                        return Ok(state.returns());
                    };
                    joint.push(action);
                }
                state.apply_actions(&joint)?;
            }
            actor @ Actor::Player(_) => {
                let legal = state.legal_actions(actor)?;
                let Some(&action) = rng.choose(&legal) else {
                    break;
                };
                state.apply_action(action)?;
            }
            Actor::Terminal => break,
        }
        moves += 1;
    }

    Ok(state.returns())
}
