//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Actor, GameParams, GameRng, RowRule};
use crate::rules::{random_playout, Game, QwintoGame, QwintoState, State};

use super::py_core::{actor_from_py, actor_to_py, PyPlayerId};
use super::to_py_err;

/// A Qwinto game in progress, with its own chance sampler.
#[pyclass(name = "QwintoGame")]
pub struct PyQwintoGame {
    state: QwintoState,
    rng: GameRng,
}

#[pymethods]
impl PyQwintoGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - players: Number of players (1-10)
    /// - miss_points: Penalty per miss (negative)
    /// - termination_points: Miss total that ends the game (negative)
    /// - max_rolls: Rolls allowed per turn
    /// - gapped_rows: Allow empty cells left of a placement
    /// - seed: RNG seed for chance sampling
    #[new]
    #[pyo3(signature = (
        players = 1,
        miss_points = -5,
        termination_points = -20,
        max_rolls = 2,
        gapped_rows = false,
        seed = 42
    ))]
    fn new(
        players: usize,
        miss_points: i32,
        termination_points: i32,
        max_rolls: u8,
        gapped_rows: bool,
        seed: u64,
    ) -> PyResult<Self> {
        let rule = if gapped_rows { RowRule::Gapped } else { RowRule::Contiguous };
        let params = GameParams::new(players)
            .with_miss_points(miss_points)
            .with_termination_points(termination_points)
            .with_max_rolls(max_rolls)
            .with_row_rule(rule);
        let game = QwintoGame::new(params).map_err(to_py_err)?;
        Ok(Self {
            state: game.new_initial_state(),
            rng: GameRng::new(seed),
        })
    }

    /// Actor to move: seat index, or CHANCE_PLAYER / SIMULTANEOUS_PLAYER /
    /// TERMINAL_PLAYER.
    fn current_player(&self) -> i32 {
        actor_to_py(self.state.current_player())
    }

    /// Legal actions for an actor (defaults to the current one).
    #[pyo3(signature = (actor = None))]
    fn legal_actions(&self, actor: Option<i32>) -> PyResult<Vec<u64>> {
        let actor = match actor {
            Some(id) => actor_from_py(id)
                .ok_or_else(|| PyValueError::new_err(format!("unknown actor {}", id)))?,
            None => self.state.current_player(),
        };
        let actions = self.state.legal_actions(actor).map_err(to_py_err)?;
        Ok(actions.into_iter().map(Action::raw).collect())
    }

    /// (outcome, probability) pairs at a chance node.
    fn chance_outcomes(&self) -> PyResult<Vec<(u64, f64)>> {
        let outcomes = self.state.chance_outcomes().map_err(to_py_err)?;
        Ok(outcomes.into_iter().map(|(a, p)| (a.raw(), p)).collect())
    }

    /// Apply a sequential action, chance outcome or flat joint id.
    fn apply_action(&mut self, action: u64) -> PyResult<()> {
        self.state.apply_action(Action::new(action)).map_err(to_py_err)
    }

    /// Apply one action per player at the submit node.
    fn apply_actions(&mut self, actions: Vec<u64>) -> PyResult<()> {
        let actions: Vec<Action> = actions.into_iter().map(Action::new).collect();
        self.state.apply_actions(&actions).map_err(to_py_err)
    }

    /// Play the game to the end with random actions; returns the returns.
    fn play_random(&mut self) -> PyResult<Vec<f64>> {
        random_playout(&mut self.state, &mut self.rng, 0).map_err(to_py_err)
    }

    /// Apply one random action (or joint action) for the current actor.
    fn apply_random_action(&mut self) -> PyResult<()> {
        random_playout(&mut self.state, &mut self.rng, 1).map_err(to_py_err)?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    fn returns(&self) -> Vec<f64> {
        self.state.returns()
    }

    /// Observation tensor as a flat numpy array.
    fn observation<'py>(
        &self,
        py: Python<'py>,
        player: &PyPlayerId,
    ) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let mut out = Vec::new();
        self.state
            .observation_tensor(player.0, &mut out)
            .map_err(to_py_err)?;
        Ok(PyArray1::from_slice_bound(py, &out))
    }

    /// One player's board: 27 cells then the miss total.
    fn board(&self, player: &PyPlayerId) -> PyResult<Vec<i32>> {
        if player.0.index() >= self.state.player_count() {
            return Err(PyValueError::new_err(format!("no such player: {}", player.0)));
        }
        Ok(self.state.board(player.0).slots().to_vec())
    }

    /// Describe an action for an actor.
    fn action_to_string(&self, actor: i32, action: u64) -> PyResult<String> {
        let actor = actor_from_py(actor)
            .ok_or_else(|| PyValueError::new_err(format!("unknown actor {}", actor)))?;
        Ok(self.state.action_to_string(actor, Action::new(action)))
    }

    /// Phase name: "Select", "Roll" or "Submit".
    #[getter]
    fn phase(&self) -> String {
        self.state.phase().to_string()
    }

    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.state.active_player())
    }

    #[getter]
    fn dice_outcome(&self) -> u8 {
        self.state.dice_outcome()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.state.turn_number()
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.state.player_count()
    }

    #[getter]
    fn num_distinct_actions(&self) -> usize {
        self.state.game().num_distinct_actions()
    }

    #[getter]
    fn observation_size(&self) -> usize {
        self.state.game().observation_tensor_size()
    }

    /// Copy the game for simulation; the copy gets a forked RNG.
    fn copy(&mut self) -> Self {
        Self {
            state: self.state.clone(),
            rng: self.rng.fork(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.state.current_player() {
            Actor::Terminal => "terminal",
            _ => "ongoing",
        };
        format!(
            "QwintoGame(turn={}, active=P{}, phase={}, status={})",
            self.state.turn_number(),
            self.state.active_player().0,
            self.state.phase(),
            status
        )
    }
}
