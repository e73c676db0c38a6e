//! Exact dice-sum distributions.
//!
//! Only the sum of the selected dice matters, so a roll is a single chance
//! event over sums. Probabilities are count / 6^n with the counts obtained
//! by convolving fair six-sided dice.

use crate::board::{DIE_FACES, ROWS};
use crate::core::{Action, EngineError};

/// Number of ways to roll each sum with `num_dice` dice.
///
/// Index `i` holds the count for sum `num_dice + i`.
#[must_use]
pub fn sum_counts(num_dice: u32) -> Vec<u32> {
    let faces = u32::from(DIE_FACES) as usize;
    let mut counts = vec![1u32];
    for _ in 0..num_dice {
        let mut next = vec![0u32; counts.len() + faces - 1];
        for (i, &c) in counts.iter().enumerate() {
            for slot in &mut next[i..i + faces] {
                *slot += c;
            }
        }
        counts = next;
    }
    counts
}

/// The (sum, probability) pairs for a roll of `num_dice` dice, ascending.
pub fn outcomes(num_dice: u32) -> Result<Vec<(Action, f64)>, EngineError> {
    if num_dice == 0 || num_dice as usize > ROWS {
        return Err(EngineError::InvalidDiceCount { count: num_dice });
    }

    let total = f64::from(u32::from(DIE_FACES).pow(num_dice));
    let outcomes = sum_counts(num_dice)
        .into_iter()
        .enumerate()
        .map(|(i, c)| (Action::new(u64::from(num_dice) + i as u64), f64::from(c) / total))
        .collect();
    Ok(outcomes)
}
