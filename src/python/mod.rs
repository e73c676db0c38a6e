//! Python bindings for the Qwinto engine.
//!
//! # Quick Start
//!
//! ```python
//! import qwinto
//!
//! game = qwinto.QwintoGame(players=2, seed=42)
//! while not game.is_terminal():
//!     game.apply_random_action()
//! print(game.returns())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::EngineError;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// qwinto: Qwinto rules engine for RL/MCTS training.
#[pymodule]
fn qwinto(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyQwintoGame>()?;

    m.add("CHANCE_PLAYER", CHANCE_PLAYER)?;
    m.add("SIMULTANEOUS_PLAYER", SIMULTANEOUS_PLAYER)?;
    m.add("TERMINAL_PLAYER", TERMINAL_PLAYER)?;

    Ok(())
}
