//! Session and configuration tests.
//!
//! These drive whole games through `Session`, the way a CLI or UI would.

use snakes_ladders::board::Board;
use snakes_ladders::core::{
    BoardConfig, GameConfig, GameRng, GameRngState, GameState, PlayerId, RandomSource,
    ScriptedDice, TurnEvent,
};
use snakes_ladders::error::{ConfigError, TurnError};
use snakes_ladders::session::{apply_roll, Session};

/// Seeded games on the classic board always finish, for several table sizes.
#[test]
fn test_seeded_games_finish() {
    for players in [2, 3, 4, 6] {
        for seed in 0..10 {
            let config = GameConfig::new(players).with_seed(seed);
            let mut session = Session::from_config(&config).unwrap();

            let winner = session.play_to_end(20_000).unwrap();
            let winner = winner.expect("classic game should finish");

            assert!(winner.index() < players);
            assert_eq!(session.state().position(winner), session.board().final_cell());
        }
    }
}

/// History replays the whole game in order.
#[test]
fn test_history_matches_turns() {
    let mut session = Session::from_config(&GameConfig::new(3).with_seed(5)).unwrap();
    session.play_to_end(20_000).unwrap();

    let state = session.state();
    assert_eq!(state.history().len() as u32, state.turn_number());
    for (i, outcome) in state.history().iter().enumerate() {
        assert_eq!(outcome.turn as usize, i + 1);
        assert_eq!(outcome.player.index(), i % 3);
    }

    let last = state.history().last().unwrap();
    assert!(last.is_win());
    assert_eq!(state.last_roll(), Some(last.roll));
}

/// Turn cap stops a game that has not finished.
#[test]
fn test_turn_cap() {
    let board = Board::classic();
    // nobody ever rolls a 1
    let dice = ScriptedDice::new([2, 3, 4, 5, 6]).unwrap();
    let mut session = Session::new(board, 2, dice).unwrap();

    assert_eq!(session.play_to_end(50).unwrap(), None);
    assert_eq!(session.state().turn_number(), 50);
    assert!(!session.is_over());
    assert!(session
        .state()
        .history()
        .iter()
        .all(|o| o.events.as_slice() == [TurnEvent::FailedToEnter]));
}

/// A scripted two-player race on a tiny board.
#[test]
fn test_scripted_race() {
    let config = BoardConfig::empty(3).with_ladder(2, 6).with_snake(8, 3);
    let board = config.build().unwrap();
    // p0 enters, p1 enters, p0 climbs 2 -> 6, p1 walks 1 -> 7,
    // p0 slides 8 -> 3, p1 lands on 9 and wins
    let dice = ScriptedDice::new([1, 1, 1, 6, 2, 2]).unwrap();
    let mut session = Session::new(board, 2, dice).unwrap();

    let winner = session.play_to_end(6).unwrap();

    assert_eq!(winner, Some(PlayerId::new(1)));
    let (board, state) = session.into_parts();
    assert_eq!(state.position(PlayerId::new(0)).number(), 3);
    assert_eq!(state.position(PlayerId::new(1)), board.final_cell());
}

/// Rolling after the game ends is an error, not a silent no-op.
#[test]
fn test_roll_after_game_over() {
    let board = Board::new(2, []).unwrap();
    let dice = ScriptedDice::new([1, 3, 1, 3]).unwrap();
    let mut session = Session::new(board, 2, dice).unwrap();

    // p1 never enters; p0 creeps up one cell per turn
    let winner = session.play_to_end(100).unwrap();
    assert!(winner.is_some());
    assert!(matches!(session.roll(), Err(TurnError::GameOver { .. })));
}

/// Bad configurations fail before a game starts.
#[test]
fn test_invalid_config() {
    let config = GameConfig::new(1);
    assert!(matches!(
        Session::from_config(&config),
        Err(ConfigError::PlayerCount { count: 1, .. })
    ));

    let config = GameConfig::new(2).with_board(BoardConfig::empty(10).with_snake(101, 5));
    assert!(matches!(
        Session::from_config(&config),
        Err(ConfigError::CellOutOfRange { cell: 101, max: 99 })
    ));
}

/// Configuration loaded from TOML drives the same game as one built in code.
#[test]
fn test_toml_config_matches_builder() {
    let text = r#"
        player_count = 2
        seed = 42

        [board]
        size = 10
        snakes = [[17, 7]]
        ladders = [[4, 14]]
    "#;
    let from_toml = GameConfig::from_toml_str(text).unwrap();
    let built = GameConfig::new(2)
        .with_seed(42)
        .with_board(BoardConfig::empty(10).with_snake(17, 7).with_ladder(4, 14));
    assert_eq!(from_toml, built);

    let mut a = Session::from_config(&from_toml).unwrap();
    let mut b = Session::from_config(&built).unwrap();
    a.play_to_end(20_000).unwrap();
    b.play_to_end(20_000).unwrap();
    assert_eq!(a.state(), b.state());
}

/// A game saved mid-play and loaded again finishes exactly like one left running.
#[test]
fn test_saved_game_resumes() {
    let config = GameConfig::new(3).with_seed(11);
    let mut running = Session::from_config(&config).unwrap();
    running.play_to_end(30).unwrap();

    let state_json = serde_json::to_string(running.state()).unwrap();
    let dice_json = serde_json::to_string(&running.dice().state()).unwrap();

    let mut state: GameState = serde_json::from_str(&state_json).unwrap();
    let dice_state: GameRngState = serde_json::from_str(&dice_json).unwrap();
    let mut dice = GameRng::from_state(&dice_state);
    let board = config.build_board().unwrap();

    running.play_to_end(20_000).unwrap();
    while state.in_progress() {
        apply_roll(&mut state, &board, dice.next()).unwrap();
    }
    assert_eq!(&state, running.state());
}

/// A tampered save is rejected on load instead of reaching the engine.
#[test]
fn test_tampered_save_is_rejected() {
    let mut session = Session::from_config(&GameConfig::new(2).with_seed(3)).unwrap();
    session.play_to_end(10).unwrap();

    let mut saved = serde_json::to_value(session.state()).unwrap();
    saved["current_player"] = serde_json::json!(5);

    assert!(serde_json::from_value::<GameState>(saved).is_err());
}
