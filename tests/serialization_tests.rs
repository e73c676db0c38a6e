//! Serde round-trips of parameters and state snapshots.

use qwinto::board::Board;
use qwinto::core::{Action, ActionRecord, GameParams, GameRng, PlayerMap, RowRule};
use qwinto::rules::{random_playout, Game, QwintoGame, State, TurnState};

#[test]
fn test_params_from_partial_json() {
    let params: GameParams = serde_json::from_str(r#"{"players": 3, "row_rule": "gapped"}"#).unwrap();

    assert_eq!(params.players, 3);
    assert_eq!(params.row_rule, RowRule::Gapped);
    assert_eq!(params.miss_points, -5);
    assert_eq!(params.termination_points, -20);
    assert_eq!(params.max_rolls, 2);
    assert!(QwintoGame::new(params).is_ok());
}

#[test]
fn test_invalid_params_from_json_rejected() {
    let params: GameParams = serde_json::from_str(r#"{"players": 2, "miss_points": 3}"#).unwrap();

    assert!(QwintoGame::new(params).is_err());
}

#[test]
fn test_snapshot_round_trip() {
    let game = QwintoGame::with_players(3).unwrap();
    let mut state = game.new_initial_state();
    random_playout(&mut state, &mut GameRng::new(11), 40).unwrap();

    let turn_json = serde_json::to_string(state.turn()).unwrap();
    let boards_json = serde_json::to_string(state.boards()).unwrap();
    let history: Vec<ActionRecord> = state.history().iter().cloned().collect();
    let history_json = serde_json::to_string(&history).unwrap();

    let turn: TurnState = serde_json::from_str(&turn_json).unwrap();
    let boards: PlayerMap<Board> = serde_json::from_str(&boards_json).unwrap();
    let restored: Vec<ActionRecord> = serde_json::from_str(&history_json).unwrap();

    assert_eq!(&turn, state.turn());
    assert_eq!(&boards, state.boards());
    assert_eq!(restored, history);
}

#[test]
fn test_history_replays_to_same_state() {
    let game = QwintoGame::with_players(2).unwrap();
    let mut state = game.new_initial_state();
    random_playout(&mut state, &mut GameRng::new(5), 0).unwrap();

    // Submit records come in seat-ordered groups of one per player.
    let records: Vec<ActionRecord> = state.history().iter().cloned().collect();
    let mut replay = game.new_initial_state();
    let mut i = 0;
    while i < records.len() {
        if replay.is_simultaneous_node() {
            let joint: Vec<Action> = records[i..i + 2].iter().map(|r| r.action).collect();
            replay.apply_actions(&joint).unwrap();
            i += 2;
        } else {
            replay.apply_action(records[i].action).unwrap();
            i += 1;
        }
    }

    assert_eq!(replay.boards(), state.boards());
    assert_eq!(replay.turn(), state.turn());
    assert_eq!(replay.returns(), state.returns());
}
