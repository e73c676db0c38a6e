//! # qwinto
//!
//! Rules engine for the Qwinto dice game, built for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every operation checks the whole action
//!    against the current phase and boards before touching state, and
//!    reports violations as `EngineError`.
//!
//! 2. **N-Player First**: 1 to 10 players; nothing assumes two.
//!
//! 3. **Geometry as data**: rows, column links and bonus columns are const
//!    tables in `board::geometry`.
//!
//! ## Architecture
//!
//! - **Host seam**: search code sees only the `Game` / `State` traits.
//!   Chance nodes publish exact dice-sum distributions; the engine never
//!   rolls dice itself.
//!
//! - **Cheap clones**: boards are fixed arrays and the action history is a
//!   persistent `im` vector, so states clone in O(players).
//!
//! ## Modules
//!
//! - `core`: players, actions, parameters, errors, RNG
//! - `board`: board geometry and per-player score sheets
//! - `rules`: phase machine, legality, chance, game and state
//!
//! ```
//! use qwinto::{Game, GameRng, QwintoGame, State};
//!
//! let game = QwintoGame::with_players(2).unwrap();
//! let mut state = game.new_initial_state();
//! let returns = qwinto::random_playout(&mut state, &mut GameRng::new(42), 0).unwrap();
//!
//! assert!(state.is_terminal());
//! assert_eq!(returns.len(), 2);
//! ```

pub mod board;
pub mod core;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Actor, EngineError, GameParams, GameRng, PlayerId, PlayerMap, RowRule,
};

pub use crate::board::{Board, Color, DiceSelection};

pub use crate::rules::{
    random_playout, Game, Phase, QwintoGame, QwintoState, State, TurnState,
};
