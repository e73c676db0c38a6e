//! Core engine types: players, actions, configuration, errors, RNG.
//!
//! This module contains the building blocks shared by the board and the
//! rules: they know nothing about phases or scoring.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameParams, RowRule, MAX_PLAYERS, MIN_PLAYERS};
pub use error::EngineError;
pub use player::{Actor, PlayerId, PlayerMap};
pub use rng::GameRng;
