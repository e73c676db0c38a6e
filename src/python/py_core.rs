//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Actor, PlayerId};

/// Python-side id of the chance actor.
pub const CHANCE_PLAYER: i32 = -1;

/// Python-side id of the simultaneous submit node.
pub const SIMULTANEOUS_PLAYER: i32 = -2;

/// Python-side id reported once the game is over.
pub const TERMINAL_PLAYER: i32 = -4;

/// Actor as a Python integer: seat index or one of the negative ids.
pub(crate) fn actor_to_py(actor: Actor) -> i32 {
    match actor {
        Actor::Player(p) => i32::from(p.0),
        Actor::Chance => CHANCE_PLAYER,
        Actor::Simultaneous => SIMULTANEOUS_PLAYER,
        Actor::Terminal => TERMINAL_PLAYER,
    }
}

/// Inverse of `actor_to_py`; `None` for unknown ids.
pub(crate) fn actor_from_py(id: i32) -> Option<Actor> {
    match id {
        CHANCE_PLAYER => Some(Actor::Chance),
        SIMULTANEOUS_PLAYER => Some(Actor::Simultaneous),
        TERMINAL_PLAYER => Some(Actor::Terminal),
        _ => u8::try_from(id).ok().map(|p| Actor::Player(PlayerId::new(p))),
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID.
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0 .0)
    }
}
