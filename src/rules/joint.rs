//! Flat encoding of joint actions.
//!
//! Hosts that only speak single integer actions address the simultaneous
//! submit phase through one flat id per combination of per-player choices.
//! The id is a mixed-radix number: digit `p` is the index of player `p`'s
//! action within that player's ascending legal list, player 0 least
//! significant.

use crate::core::{Action, EngineError};

/// Largest joint action space listed as flat ids. Bigger tables must be
/// driven with one action per player through `State::apply_actions`.
pub const MAX_FLAT_JOINT_ACTIONS: u64 = 1 << 20;

/// Number of joint actions for the given per-player legal lists.
///
/// Saturates at `u64::MAX`; realistic tables stay far below it.
#[must_use]
pub fn joint_action_count(legal: &[Vec<Action>]) -> u64 {
    legal
        .iter()
        .fold(1u64, |acc, l| acc.saturating_mul(l.len() as u64))
}

/// Decode a flat joint id into one action per player.
pub fn unflatten(legal: &[Vec<Action>], flat: Action) -> Result<Vec<Action>, EngineError> {
    let count = joint_action_count(legal);
    if flat.raw() >= count {
        return Err(EngineError::JointActionOutOfRange {
            action: flat,
            count,
        });
    }

    let mut rest = flat.raw();
    let actions = legal
        .iter()
        .map(|options| {
            let n = options.len() as u64;
            let action = options[(rest % n) as usize];
            rest /= n;
            action
        })
        .collect();
    Ok(actions)
}
