//! Host-framework traits.
//!
//! Search and learning code talks to a game through these two traits:
//! - `Game`: static facts about a configured game, and fresh states
//! - `State`: one position, its legal actions, transitions and payoffs
//!
//! Sequential decisions (a player or chance) go through `apply_action`;
//! the simultaneous phase goes through `apply_actions` with one action per
//! player, or through `apply_action` with a flat joint id.

use std::sync::Arc;

use crate::core::{Action, Actor, EngineError, PlayerId};

/// A configured game.
pub trait Game {
    /// State type produced by this game.
    type State: State;

    /// Create the initial state. The state keeps a reference to the game.
    fn new_initial_state(self: &Arc<Self>) -> Self::State;

    /// Number of players.
    fn num_players(&self) -> usize;

    /// Size of the per-player action id space.
    fn num_distinct_actions(&self) -> usize;

    /// Most outcomes any chance node can have.
    fn max_chance_outcomes(&self) -> usize;

    /// Lowest possible return for a player.
    fn min_utility(&self) -> f64;

    /// Highest possible return for a player.
    fn max_utility(&self) -> f64;

    /// Shape of `State::observation_tensor`.
    fn observation_tensor_shape(&self) -> Vec<usize>;

    /// Number of values in `State::observation_tensor`.
    fn observation_tensor_size(&self) -> usize {
        self.observation_tensor_shape().iter().product()
    }

    /// Upper bound on the number of moves in a game.
    fn max_game_length(&self) -> usize;
}

/// A game position.
///
/// Implementations must be deterministic: the same sequence of applied
/// actions always yields the same state.
pub trait State: Clone {
    /// Number of players.
    fn num_players(&self) -> usize;

    /// Who must act next, or `Actor::Terminal` once the game is over.
    fn current_player(&self) -> Actor;

    /// Legal actions for `actor`, strictly ascending.
    ///
    /// Empty when the actor has nothing to decide.
    fn legal_actions(&self, actor: Actor) -> Result<Vec<Action>, EngineError>;

    /// Outcomes and probabilities at a chance node.
    fn chance_outcomes(&self) -> Result<Vec<(Action, f64)>, EngineError>;

    /// Apply a chance outcome, a sequential decision or a flat joint id.
    fn apply_action(&mut self, action: Action) -> Result<(), EngineError>;

    /// Apply one action per player at the simultaneous node.
    fn apply_actions(&mut self, actions: &[Action]) -> Result<(), EngineError>;

    /// Whether the game is over.
    fn is_terminal(&self) -> bool;

    /// Final utility per player; all zero before the game ends.
    fn returns(&self) -> Vec<f64>;

    /// Encode the position into `out`, replacing its contents.
    fn observation_tensor(&self, player: PlayerId, out: &mut Vec<f32>) -> Result<(), EngineError>;

    /// Human-readable description of an action.
    fn action_to_string(&self, actor: Actor, action: Action) -> String;

    /// Whether the next action is sampled from `chance_outcomes`.
    fn is_chance_node(&self) -> bool {
        self.current_player() == Actor::Chance
    }

    /// Whether all players act at once.
    fn is_simultaneous_node(&self) -> bool {
        self.current_player() == Actor::Simultaneous
    }
}
