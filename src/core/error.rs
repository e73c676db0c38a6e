//! Engine error kinds.
//!
//! Every error is a caller contract violation: an action outside the legal
//! set, or an operation invoked in the wrong phase. A call that returns an
//! error has not modified the state.

use thiserror::Error;

use super::action::Action;
use super::player::{Actor, PlayerId};
use crate::rules::Phase;

/// Errors returned by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("joint action has {actual} entries, expected one per player ({expected})")]
    JointActionArity { expected: usize, actual: usize },

    #[error("{operation} is not valid in phase {phase}")]
    WrongPhase {
        phase: Phase,
        operation: &'static str,
    },

    #[error("active {player} must write a field or take a miss, not skip")]
    ActiveSkipped { player: PlayerId },

    #[error("{player} is not active and cannot take a miss")]
    InactiveMissed { player: PlayerId },

    #[error("action {action} is not legal for {actor}")]
    IllegalAction { actor: Actor, action: Action },

    #[error("chance outcomes requested while awaiting {awaiting}")]
    NotChanceNode { awaiting: Actor },

    #[error("{count} dice selected, expected 1 to 3")]
    InvalidDiceCount { count: u32 },

    #[error("the game is over")]
    GameOver,

    #[error("{player} is not seated in a {player_count}-player game")]
    InvalidPlayer { player: PlayerId, player_count: usize },

    #[error("joint action {action} out of range ({count} joint actions)")]
    JointActionOutOfRange { action: Action, count: u64 },

    #[error("{count} joint actions exceed the flat id limit of {max}; apply one action per player")]
    JointActionSpaceTooLarge { count: u64, max: u64 },

    #[error("observation has {actual} values, expected {expected}")]
    ObservationSize { expected: usize, actual: usize },

    #[error("{count} players requested, supported range is {min} to {max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("invalid game parameter {name}: {reason}")]
    InvalidParams {
        name: &'static str,
        reason: &'static str,
    },
}
