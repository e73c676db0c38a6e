//! Game state: turn counters, boards and the transition logic.
//!
//! ## TurnState
//!
//! The counters of the running turn: phase, active player, awaited actor,
//! rolls used, selected dice and the current outcome.
//!
//! ## QwintoState
//!
//! Complete position: the turn state, one board per player and the action
//! history. Every mutation goes through `apply_action` / `apply_actions`,
//! which validate fully before touching anything.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::chance;
use super::engine::{Game, State};
use super::game::QwintoGame;
use super::joint;
use super::observation;
use super::phase::{transition, Control, Phase, Step};
use crate::board::{Board, DiceSelection};
use crate::core::{Action, ActionRecord, Actor, EngineError, PlayerId, PlayerMap};

/// Counters of the running turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Current phase.
    pub phase: Phase,

    /// Player whose turn it is (selects and rolls the dice).
    pub active_player: PlayerId,

    /// Whose decision is awaited. Differs from the active player at chance
    /// nodes and during the simultaneous submit.
    pub awaiting: Actor,

    /// Rolls made this turn, counting the first.
    pub rolls: u8,

    /// Dice selected this turn.
    pub dice: DiceSelection,

    /// Sum of the last roll; 0 until rolled.
    pub outcome: u8,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub sequence: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            phase: Phase::SelectDice,
            active_player: PlayerId::new(0),
            awaiting: Actor::Player(PlayerId::new(0)),
            rolls: 0,
            dice: DiceSelection::NONE,
            outcome: 0,
            turn_number: 1,
            sequence: 0,
        }
    }
}

/// A Qwinto position.
///
/// Cloning is cheap and yields a fully independent state: boards are
/// copied and the history is a persistent vector.
#[derive(Clone, Debug)]
pub struct QwintoState {
    game: Arc<QwintoGame>,
    turn: TurnState,
    boards: PlayerMap<Board>,
    history: Vector<ActionRecord>,
}

impl QwintoState {
    /// Create the initial state of `game`.
    #[must_use]
    pub fn new(game: Arc<QwintoGame>) -> Self {
        let players = game.num_players();
        Self {
            game,
            turn: TurnState::default(),
            boards: PlayerMap::with_default(players),
            history: Vector::new(),
        }
    }

    /// The game this state belongs to.
    #[must_use]
    pub fn game(&self) -> &Arc<QwintoGame> {
        &self.game
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.boards.player_count()
    }

    /// Turn counters.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active_player
    }

    /// Dice selected this turn.
    #[must_use]
    pub fn dice(&self) -> DiceSelection {
        self.turn.dice
    }

    /// Sum of the last roll; 0 until rolled.
    #[must_use]
    pub fn dice_outcome(&self) -> u8 {
        self.turn.outcome
    }

    /// Rolls made this turn.
    #[must_use]
    pub fn rolls(&self) -> u8 {
        self.turn.rolls
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    /// A player's board.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player]
    }

    /// All boards in seat order.
    #[must_use]
    pub fn boards(&self) -> &PlayerMap<Board> {
        &self.boards
    }

    /// Every action applied so far.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    fn check_seat(&self, player: PlayerId) -> Result<(), EngineError> {
        if player.index() < self.player_count() {
            Ok(())
        } else {
            Err(EngineError::InvalidPlayer {
                player,
                player_count: self.player_count(),
            })
        }
    }

    /// Legal submit-phase actions for one player: writable cells, then
    /// miss for the active player or skip for everyone else.
    fn submit_actions(&self, player: PlayerId) -> Vec<Action> {
        let rule = self.game.params().row_rule;
        let mut actions: Vec<Action> = self.boards[player]
            .placements(self.turn.dice, self.turn.outcome, rule)
            .into_iter()
            .map(Action::from)
            .collect();
        if player == self.turn.active_player {
            actions.push(Action::MISS);
        } else {
            actions.push(Action::SKIP);
        }
        actions
    }

    fn player_actions(&self, player: PlayerId) -> Vec<Action> {
        let awaited = self.turn.awaiting == Actor::Player(player);
        match self.turn.phase {
            Phase::SelectDice if awaited => DiceSelection::ALL
                .iter()
                .map(|d| Action::new(u64::from(d.mask())))
                .collect(),
            Phase::RollDice if awaited => {
                let mut actions = Vec::with_capacity(2);
                if self.turn.rolls < self.game.params().max_rolls {
                    actions.push(Action::REROLL);
                }
                actions.push(Action::ACCEPT);
                actions
            }
            Phase::SelectDice | Phase::RollDice => Vec::new(),
            Phase::SubmitPoints => self.submit_actions(player),
        }
    }

    fn per_player_submit_actions(&self) -> Vec<Vec<Action>> {
        PlayerId::all(self.player_count())
            .map(|p| self.submit_actions(p))
            .collect()
    }

    /// Look up the transition for `step` without changing anything.
    fn next(&self, step: Step) -> Result<(Phase, Control), EngineError> {
        transition(self.turn.phase, step).ok_or(EngineError::WrongPhase {
            phase: self.turn.phase,
            operation: step.name(),
        })
    }

    fn enter(&mut self, (phase, control): (Phase, Control)) {
        self.turn.phase = phase;
        self.turn.awaiting = match control {
            Control::Chance => Actor::Chance,
            Control::Active => Actor::Player(self.turn.active_player),
            Control::All => Actor::Simultaneous,
            Control::NextPlayer => {
                self.turn.active_player = self.turn.active_player.next(self.player_count());
                self.turn.turn_number += 1;
                self.turn.sequence = 0;
                debug!(
                    turn = self.turn.turn_number,
                    player = self.turn.active_player.index(),
                    "turn started"
                );
                Actor::Player(self.turn.active_player)
            }
        };
    }

    fn record(&mut self, actor: Actor, action: Action) {
        trace!(%actor, action = action.raw(), phase = %self.turn.phase, "applied action");
        let record = ActionRecord::new(actor, action, self.turn.turn_number, self.turn.sequence);
        self.turn.sequence += 1;
        self.history.push_back(record);
    }

    fn apply_select(&mut self, player: PlayerId, action: Action) -> Result<(), EngineError> {
        let dice = DiceSelection::from_mask(action.raw()).ok_or(EngineError::IllegalAction {
            actor: Actor::Player(player),
            action,
        })?;
        let next = self.next(Step::Select)?;

        self.record(Actor::Player(player), action);
        self.turn.dice = dice;
        self.turn.rolls = 1;
        self.turn.outcome = 0;
        self.enter(next);
        Ok(())
    }

    fn apply_roll(&mut self, action: Action) -> Result<(), EngineError> {
        let outcomes = chance::outcomes(self.turn.dice.count())?;
        if !outcomes.iter().any(|&(a, _)| a == action) {
            return Err(EngineError::IllegalAction {
                actor: Actor::Chance,
                action,
            });
        }
        let next = self.next(Step::Roll)?;

        self.record(Actor::Chance, action);
        self.turn.outcome = action.raw() as u8;
        self.enter(next);
        Ok(())
    }

    fn apply_roll_decision(&mut self, player: PlayerId, action: Action) -> Result<(), EngineError> {
        if action == Action::REROLL {
            if self.turn.rolls >= self.game.params().max_rolls {
                return Err(EngineError::IllegalAction {
                    actor: Actor::Player(player),
                    action,
                });
            }
            let next = self.next(Step::Reroll)?;

            self.record(Actor::Player(player), action);
            self.turn.rolls += 1;
            self.enter(next);
        } else {
            let next = self.next(Step::Accept)?;

            self.record(Actor::Player(player), action);
            self.enter(next);
        }
        Ok(())
    }

    fn validate_submit(&self, player: PlayerId, action: Action) -> Result<(), EngineError> {
        let active = player == self.turn.active_player;
        if action == Action::SKIP {
            return if active {
                Err(EngineError::ActiveSkipped { player })
            } else {
                Ok(())
            };
        }
        if action == Action::MISS {
            return if active {
                Ok(())
            } else {
                Err(EngineError::InactiveMissed { player })
            };
        }

        let rule = self.game.params().row_rule;
        let placeable = action.cell().is_some_and(|cell| {
            self.boards[player].can_place(cell, self.turn.dice, self.turn.outcome, rule)
        });
        if placeable {
            Ok(())
        } else {
            Err(EngineError::IllegalAction {
                actor: Actor::Player(player),
                action,
            })
        }
    }

    fn describe(&self, player: PlayerId, action: Action) -> String {
        let prefix = format!("[P{}]", player.index());
        match self.turn.phase {
            Phase::SelectDice => match DiceSelection::from_mask(action.raw()) {
                Some(dice) => format!("{} Dice: {}", prefix, dice),
                None => format!("{} Dice: invalid ({})", prefix, action),
            },
            Phase::RollDice if action == Action::REROLL => format!("{} Re-roll", prefix),
            Phase::RollDice => format!("{} Take outcome", prefix),
            Phase::SubmitPoints if action == Action::MISS => format!("{} Miss", prefix),
            Phase::SubmitPoints if action == Action::SKIP => format!("{} Skip", prefix),
            Phase::SubmitPoints => format!("{} Field: {}", prefix, action),
        }
    }
}

impl State for QwintoState {
    fn num_players(&self) -> usize {
        self.player_count()
    }

    fn current_player(&self) -> Actor {
        if self.is_terminal() {
            Actor::Terminal
        } else {
            self.turn.awaiting
        }
    }

    fn legal_actions(&self, actor: Actor) -> Result<Vec<Action>, EngineError> {
        if let Some(player) = actor.player() {
            self.check_seat(player)?;
        }
        if self.is_terminal() {
            return Ok(Vec::new());
        }

        let actions = match actor {
            Actor::Player(player) => self.player_actions(player),
            Actor::Chance if self.turn.awaiting == Actor::Chance => self
                .chance_outcomes()?
                .into_iter()
                .map(|(a, _)| a)
                .collect(),
            Actor::Simultaneous if self.turn.awaiting == Actor::Simultaneous => {
                let count = joint::joint_action_count(&self.per_player_submit_actions());
                if count > joint::MAX_FLAT_JOINT_ACTIONS {
                    return Err(EngineError::JointActionSpaceTooLarge {
                        count,
                        max: joint::MAX_FLAT_JOINT_ACTIONS,
                    });
                }
                (0..count).map(Action::new).collect()
            }
            Actor::Chance | Actor::Simultaneous | Actor::Terminal => Vec::new(),
        };
        Ok(actions)
    }

    fn chance_outcomes(&self) -> Result<Vec<(Action, f64)>, EngineError> {
        if self.current_player() != Actor::Chance {
            return Err(EngineError::NotChanceNode {
                awaiting: self.current_player(),
            });
        }
        chance::outcomes(self.turn.dice.count())
    }

    fn apply_action(&mut self, action: Action) -> Result<(), EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }

        match self.turn.awaiting {
            Actor::Simultaneous => {
                let actions = joint::unflatten(&self.per_player_submit_actions(), action)?;
                self.apply_actions(&actions)
            }
            Actor::Chance => self.apply_roll(action),
            Actor::Player(player) => match self.turn.phase {
                Phase::SelectDice => self.apply_select(player, action),
                Phase::RollDice => self.apply_roll_decision(player, action),
                Phase::SubmitPoints => Err(EngineError::WrongPhase {
                    phase: Phase::SubmitPoints,
                    operation: "apply_action",
                }),
            },
            Actor::Terminal => Err(EngineError::GameOver),
        }
    }

    fn apply_actions(&mut self, actions: &[Action]) -> Result<(), EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if self.turn.awaiting != Actor::Simultaneous {
            return Err(EngineError::WrongPhase {
                phase: self.turn.phase,
                operation: "apply_actions",
            });
        }
        if actions.len() != self.player_count() {
            return Err(EngineError::JointActionArity {
                expected: self.player_count(),
                actual: actions.len(),
            });
        }
        for (player, &action) in PlayerId::all(self.player_count()).zip(actions) {
            self.validate_submit(player, action)?;
        }
        let next = self.next(Step::Submit)?;

        let miss_points = self.game.params().miss_points;
        let outcome = self.turn.outcome;
        for (player, &action) in PlayerId::all(self.player_count()).zip(actions) {
            self.record(Actor::Player(player), action);
            if action == Action::MISS {
                let board = &mut self.boards[player];
                board.add_miss(miss_points);
                debug!(player = player.index(), total = board.miss_total(), "miss");
            } else if let Some(cell) = action.cell() {
                self.boards[player].place(cell, outcome);
            }
        }

        self.enter(next);
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        let threshold = self.game.params().termination_points;
        self.boards.values().any(|b| b.miss_total() <= threshold)
    }

    fn returns(&self) -> Vec<f64> {
        if !self.is_terminal() {
            return vec![0.0; self.player_count()];
        }
        self.boards.values().map(|b| f64::from(b.score())).collect()
    }

    fn observation_tensor(&self, player: PlayerId, out: &mut Vec<f32>) -> Result<(), EngineError> {
        self.check_seat(player)?;
        observation::encode(self, out);

        let expected = self.game.observation_tensor_size();
        if out.len() != expected {
            return Err(EngineError::ObservationSize {
                expected,
                actual: out.len(),
            });
        }
        Ok(())
    }

    fn action_to_string(&self, actor: Actor, action: Action) -> String {
        match actor {
            Actor::Player(player) => self.describe(player, action),
            Actor::Chance => format!("Dice outcome {}", action),
            Actor::Simultaneous => {
                match joint::unflatten(&self.per_player_submit_actions(), action) {
                    Ok(actions) => {
                        let parts: Vec<String> = PlayerId::all(self.player_count())
                            .zip(actions)
                            .map(|(p, a)| self.describe(p, a))
                            .collect();
                        format!("[{}]", parts.join(", "))
                    }
                    Err(_) => format!("Invalid joint action {}", action),
                }
            }
            Actor::Terminal => format!("Terminal action {}", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::core::GameParams;

    fn new_state(players: usize) -> QwintoState {
        QwintoGame::with_players(players).unwrap().new_initial_state()
    }

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    /// Select `dice`, roll `outcome` and accept it.
    fn roll_and_accept(state: &mut QwintoState, dice: u64, outcome: u64) {
        state.apply_action(Action::new(dice)).unwrap();
        state.apply_action(Action::new(outcome)).unwrap();
        state.apply_action(Action::ACCEPT).unwrap();
    }

    #[test]
    fn test_initial_state() {
        let state = new_state(3);

        assert_eq!(state.phase(), Phase::SelectDice);
        assert_eq!(state.current_player(), Actor::Player(p(0)));
        assert_eq!(state.active_player(), p(0));
        assert_eq!(state.dice_outcome(), 0);
        assert_eq!(state.rolls(), 0);
        assert_eq!(state.turn_number(), 1);
        assert!(!state.is_terminal());
        assert_eq!(state.returns(), vec![0.0; 3]);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_select_dice_actions() {
        let state = new_state(2);

        let expected: Vec<_> = (1..=7).map(Action::new).collect();
        assert_eq!(state.legal_actions(Actor::Player(p(0))).unwrap(), expected);
        assert!(state.legal_actions(Actor::Player(p(1))).unwrap().is_empty());
        assert!(state.legal_actions(Actor::Chance).unwrap().is_empty());
        assert!(state.legal_actions(Actor::Simultaneous).unwrap().is_empty());
    }

    #[test]
    fn test_select_moves_to_chance() {
        let mut state = new_state(2);
        state.apply_action(Action::new(3)).unwrap();

        assert_eq!(state.phase(), Phase::RollDice);
        assert_eq!(state.current_player(), Actor::Chance);
        assert_eq!(state.rolls(), 1);
        assert_eq!(state.dice(), DiceSelection::of(&[Color::Orange, Color::Purple]));
        assert!(state.is_chance_node());

        let outcomes = state.chance_outcomes().unwrap();
        assert_eq!(outcomes.len(), 11);
        let legal = state.legal_actions(Actor::Chance).unwrap();
        assert_eq!(legal.first(), Some(&Action::new(2)));
        assert_eq!(legal.last(), Some(&Action::new(12)));
    }

    #[test]
    fn test_reroll_limit() {
        let mut state = new_state(1);
        state.apply_action(Action::new(1)).unwrap();
        state.apply_action(Action::new(4)).unwrap();

        assert_eq!(
            state.legal_actions(Actor::Player(p(0))).unwrap(),
            vec![Action::REROLL, Action::ACCEPT]
        );

        state.apply_action(Action::REROLL).unwrap();
        assert_eq!(state.current_player(), Actor::Chance);
        assert_eq!(state.rolls(), 2);

        state.apply_action(Action::new(6)).unwrap();
        assert_eq!(state.legal_actions(Actor::Player(p(0))).unwrap(), vec![Action::ACCEPT]);
        assert_eq!(
            state.apply_action(Action::REROLL),
            Err(EngineError::IllegalAction {
                actor: Actor::Player(p(0)),
                action: Action::REROLL
            })
        );
        assert_eq!(state.dice_outcome(), 6);
    }

    #[test]
    fn test_accept_any_nonzero() {
        let mut state = new_state(1);
        state.apply_action(Action::new(1)).unwrap();
        state.apply_action(Action::new(4)).unwrap();
        state.apply_action(Action::new(17)).unwrap();

        assert_eq!(state.phase(), Phase::SubmitPoints);
        assert_eq!(state.current_player(), Actor::Simultaneous);
    }

    #[test]
    fn test_roll_outside_support_rejected() {
        let mut state = new_state(1);
        state.apply_action(Action::new(7)).unwrap();

        assert!(state.apply_action(Action::new(2)).is_err());
        assert!(state.apply_action(Action::new(19)).is_err());
        assert_eq!(state.current_player(), Actor::Chance);
        assert!(state.apply_action(Action::new(3)).is_ok());
    }

    #[test]
    fn test_invalid_selection_rejected() {
        let mut state = new_state(1);

        assert!(state.apply_action(Action::new(0)).is_err());
        assert!(state.apply_action(Action::new(8)).is_err());
        assert_eq!(state.phase(), Phase::SelectDice);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_submit_legal_actions() {
        let mut state = new_state(2);
        roll_and_accept(&mut state, 1, 5);

        assert_eq!(
            state.legal_actions(Actor::Player(p(0))).unwrap(),
            vec![Action::new(0), Action::MISS]
        );
        assert_eq!(
            state.legal_actions(Actor::Player(p(1))).unwrap(),
            vec![Action::new(0), Action::SKIP]
        );
        assert_eq!(state.legal_actions(Actor::Simultaneous).unwrap().len(), 4);
    }

    #[test]
    fn test_submit_writes_boards_and_advances() {
        let mut state = new_state(2);
        roll_and_accept(&mut state, 1, 5);

        state.apply_actions(&[Action::new(0), Action::new(0)]).unwrap();

        assert_eq!(state.board(p(0)).value(0), 5);
        assert_eq!(state.board(p(1)).value(0), 5);
        assert_eq!(state.phase(), Phase::SelectDice);
        assert_eq!(state.active_player(), p(1));
        assert_eq!(state.current_player(), Actor::Player(p(1)));
        assert_eq!(state.turn_number(), 2);
    }

    #[test]
    fn test_submit_validation() {
        let mut state = new_state(2);
        roll_and_accept(&mut state, 1, 5);

        assert_eq!(
            state.apply_actions(&[Action::SKIP, Action::SKIP]),
            Err(EngineError::ActiveSkipped { player: p(0) })
        );
        assert_eq!(
            state.apply_actions(&[Action::MISS, Action::MISS]),
            Err(EngineError::InactiveMissed { player: p(1) })
        );
        assert_eq!(
            state.apply_actions(&[Action::new(9), Action::SKIP]),
            Err(EngineError::IllegalAction {
                actor: Actor::Player(p(0)),
                action: Action::new(9)
            })
        );
        assert_eq!(
            state.apply_actions(&[Action::MISS]),
            Err(EngineError::JointActionArity {
                expected: 2,
                actual: 1
            })
        );

        // Nothing was applied.
        assert_eq!(state.board(p(0)), &Board::new());
        assert_eq!(state.phase(), Phase::SubmitPoints);
    }

    #[test]
    fn test_apply_actions_wrong_phase() {
        let mut state = new_state(2);

        assert_eq!(
            state.apply_actions(&[Action::MISS, Action::SKIP]),
            Err(EngineError::WrongPhase {
                phase: Phase::SelectDice,
                operation: "apply_actions"
            })
        );
    }

    #[test]
    fn test_chance_outcomes_outside_chance_node() {
        let state = new_state(1);

        assert_eq!(
            state.chance_outcomes(),
            Err(EngineError::NotChanceNode {
                awaiting: Actor::Player(p(0))
            })
        );
    }

    #[test]
    fn test_flat_joint_action() {
        let mut state = new_state(2);
        roll_and_accept(&mut state, 1, 5);

        // Player 0: [0, MISS], player 1: [0, SKIP]. Id 3 = (MISS, SKIP).
        assert_eq!(
            state.action_to_string(Actor::Simultaneous, Action::new(3)),
            "[[P0] Miss, [P1] Skip]"
        );
        state.apply_action(Action::new(3)).unwrap();

        assert_eq!(state.board(p(0)).miss_total(), -5);
        assert_eq!(state.board(p(1)), &Board::new());
        assert_eq!(state.active_player(), p(1));
    }

    #[test]
    fn test_terminal_after_four_misses() {
        let mut state = new_state(1);

        for turn in 0..4 {
            assert!(!state.is_terminal(), "turn {}", turn);
            roll_and_accept(&mut state, 2, 3);
            state.apply_actions(&[Action::MISS]).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.current_player(), Actor::Terminal);
        assert_eq!(state.returns(), vec![-20.0]);
        assert!(state.legal_actions(Actor::Player(p(0))).unwrap().is_empty());
        assert_eq!(state.apply_action(Action::new(1)), Err(EngineError::GameOver));
    }

    #[test]
    fn test_custom_miss_points() {
        let game = QwintoGame::new(GameParams::new(1).with_miss_points(-10)).unwrap();
        let mut state = game.new_initial_state();

        for _ in 0..2 {
            roll_and_accept(&mut state, 4, 2);
            state.apply_actions(&[Action::MISS]).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.returns(), vec![-20.0]);
    }

    #[test]
    fn test_history_records_every_action() {
        let mut state = new_state(2);
        roll_and_accept(&mut state, 1, 5);
        state.apply_actions(&[Action::MISS, Action::SKIP]).unwrap();

        let history: Vec<_> = state.history().iter().cloned().collect();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].actor, Actor::Player(p(0)));
        assert_eq!(history[1], ActionRecord::new(Actor::Chance, Action::new(5), 1, 1));
        assert_eq!(history[4].actor, Actor::Player(p(1)));
        assert_eq!(history[4].action, Action::SKIP);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = new_state(2);
        roll_and_accept(&mut state, 1, 5);

        let snapshot = state.clone();
        state.apply_actions(&[Action::new(0), Action::SKIP]).unwrap();

        assert_eq!(snapshot.board(p(0)).value(0), 0);
        assert_eq!(snapshot.phase(), Phase::SubmitPoints);
        assert_eq!(snapshot.history().len(), 3);
        assert_eq!(state.board(p(0)).value(0), 5);
    }

    #[test]
    fn test_action_strings() {
        let mut state = new_state(2);
        assert_eq!(
            state.action_to_string(Actor::Player(p(0)), Action::new(5)),
            "[P0] Dice: Orange, Yellow"
        );

        state.apply_action(Action::new(5)).unwrap();
        assert_eq!(state.action_to_string(Actor::Chance, Action::new(7)), "Dice outcome 7");

        state.apply_action(Action::new(7)).unwrap();
        assert_eq!(state.action_to_string(Actor::Player(p(0)), Action::REROLL), "[P0] Re-roll");

        state.apply_action(Action::ACCEPT).unwrap();
        assert_eq!(state.action_to_string(Actor::Player(p(1)), Action::new(9)), "[P1] Field: 9");
        assert_eq!(state.action_to_string(Actor::Player(p(1)), Action::SKIP), "[P1] Skip");
    }

    #[test]
    fn test_invalid_player() {
        let state = new_state(2);

        assert_eq!(
            state.legal_actions(Actor::Player(p(2))),
            Err(EngineError::InvalidPlayer {
                player: p(2),
                player_count: 2
            })
        );
        let mut out = Vec::new();
        assert!(state.observation_tensor(p(5), &mut out).is_err());
    }

    #[test]
    fn test_turn_state_serialization() {
        let mut state = new_state(2);
        state.apply_action(Action::new(6)).unwrap();

        let json = serde_json::to_string(state.turn()).unwrap();
        let restored: TurnState = serde_json::from_str(&json).unwrap();

        assert_eq!(&restored, state.turn());
    }
}
