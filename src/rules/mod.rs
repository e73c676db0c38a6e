//! Qwinto rules: phases, legality, chance and the game state machine.
//!
//! Hosts drive a game through the `Game` and `State` traits:
//! - `QwintoGame` holds the validated parameters and creates states
//! - `QwintoState` is one position; it validates every action before
//!   mutating anything
//!
//! A turn cycles Select -> Roll -> Submit (see `phase::transition`). The
//! submit phase is simultaneous: every player acts at once.

pub mod chance;
pub mod engine;
pub mod game;
pub mod joint;
mod observation;
pub mod phase;
pub mod playout;
pub mod state;

pub use engine::{Game, State};
pub use game::QwintoGame;
pub use phase::{transition, Control, Phase, Step};
pub use playout::random_playout;
pub use state::{QwintoState, TurnState};
