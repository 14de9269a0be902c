//! The turn engine.
//!
//! [`apply_roll`] is the only function that advances a [`GameState`]. It is
//! a synchronous state transition: validate, compute the move, redirect
//! through at most one link, check for a win, pass the turn.
//!
//! ## Turn rules
//!
//! - A piece off the board needs exactly a 1 to enter onto cell 1.
//! - A roll that would carry a piece past the final cell is forfeited
//!   (no bounce-back).
//! - Landing on a link source carries the piece to the link target. The
//!   target's own link, if any, is not followed.
//! - Landing exactly on the final cell wins; the turn does not pass.

use tracing::{debug, info, instrument};

use crate::board::{Board, Link};
use crate::core::{
    Cell, GameState, GameStatus, TurnEvent, TurnEvents, TurnOutcome, DIE_FACES,
};
use crate::error::TurnError;

/// Apply one die roll for the current player.
///
/// On error the state is left untouched.
///
/// ```
/// use snakes_ladders::board::Board;
/// use snakes_ladders::core::{Cell, GameState, PlayerId, TurnEvent};
/// use snakes_ladders::rules::apply_roll;
///
/// let board = Board::new(10, [(4, 14)]).unwrap();
/// let mut state = GameState::new(2).unwrap();
///
/// let outcome = apply_roll(&mut state, &board, 1).unwrap();
/// assert_eq!(outcome.events[0], TurnEvent::EnteredBoard);
/// assert_eq!(state.position(PlayerId::new(0)), Cell::new(1));
/// assert_eq!(state.current_player(), PlayerId::new(1));
/// ```
#[instrument(level = "debug", skip(state, board), fields(player = %state.current_player()))]
pub fn apply_roll(
    state: &mut GameState,
    board: &Board,
    roll: u8,
) -> Result<TurnOutcome, TurnError> {
    if let GameStatus::Won(winner) = state.status() {
        return Err(TurnError::GameOver { winner });
    }
    if !(1..=DIE_FACES).contains(&roll) {
        return Err(TurnError::RollOutOfRange { roll });
    }

    let player = state.current_player();
    let start = state.position(player);
    if !board.contains(start) {
        return Err(TurnError::PositionOffBoard {
            player,
            position: start,
        });
    }

    let mut events = TurnEvents::new();
    let end = resolve_move(board, start, roll, &mut events);

    let turn = state.begin_turn(roll);
    state.set_position(player, end);

    if board.is_final_cell(end) {
        state.declare_winner(player);
        events.push(TurnEvent::Won { player });
        info!(%player, turn, "game won");
    } else {
        state.pass_turn();
    }

    for event in &events {
        debug!(%player, roll, %event, "turn event");
    }

    let outcome = TurnOutcome {
        turn,
        player,
        roll,
        start,
        end,
        events,
    };
    state.record(outcome.clone());
    Ok(outcome)
}

/// What [`apply_roll`] would do, without touching `state`.
pub fn preview_roll(
    state: &GameState,
    board: &Board,
    roll: u8,
) -> Result<TurnOutcome, TurnError> {
    let mut scratch = state.clone();
    apply_roll(&mut scratch, board, roll)
}

/// Compute where a piece starting on `start` ends up, pushing events as it goes.
fn resolve_move(board: &Board, start: Cell, roll: u8, events: &mut TurnEvents) -> Cell {
    let landed = if start.is_start() {
        if roll != 1 {
            events.push(TurnEvent::FailedToEnter);
            return start;
        }
        events.push(TurnEvent::EnteredBoard);
        Cell::new(1)
    } else {
        match start.advance(roll, board.final_cell()) {
            Some(cell) => cell,
            None => {
                events.push(TurnEvent::Busted { position: start });
                return start;
            }
        }
    };

    events.push(TurnEvent::Moved {
        from: start,
        to: landed,
    });

    match board.link_at(landed) {
        Some(target) => {
            let link = Link::new(landed, target);
            events.push(TurnEvent::Redirected {
                kind: link.kind(),
                from: landed,
                to: target,
            });
            target
        }
        None => landed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LinkKind;
    use crate::core::PlayerId;

    fn board() -> Board {
        Board::new(10, [(17, 7), (4, 14)]).unwrap()
    }

    fn at(positions: &[u8], current: u8) -> GameState {
        let cells: Vec<_> = positions.iter().map(|&p| Cell::new(p)).collect();
        GameState::from_positions(&cells, PlayerId::new(current)).unwrap()
    }

    #[test]
    fn test_enter_on_one() {
        let mut state = GameState::new(2).unwrap();
        let out = apply_roll(&mut state, &board(), 1).unwrap();

        assert_eq!(
            out.events.as_slice(),
            &[
                TurnEvent::EnteredBoard,
                TurnEvent::Moved { from: Cell::START, to: Cell::new(1) },
            ]
        );
        assert_eq!(out.end, Cell::new(1));
        assert_eq!(state.position(PlayerId::new(0)), Cell::new(1));
    }

    #[test]
    fn test_fail_to_enter() {
        for roll in 2..=6 {
            let mut state = GameState::new(2).unwrap();
            let out = apply_roll(&mut state, &board(), roll).unwrap();

            assert_eq!(out.events.as_slice(), &[TurnEvent::FailedToEnter]);
            assert_eq!(state.position(PlayerId::new(0)), Cell::START);
            assert_eq!(state.current_player(), PlayerId::new(1));
        }
    }

    #[test]
    fn test_normal_move() {
        let mut state = at(&[5, 0], 0);
        let out = apply_roll(&mut state, &board(), 3).unwrap();

        assert_eq!(
            out.events.as_slice(),
            &[TurnEvent::Moved { from: Cell::new(5), to: Cell::new(8) }]
        );
        assert_eq!(state.position(PlayerId::new(0)), Cell::new(8));
    }

    #[test]
    fn test_ladder() {
        let mut state = at(&[1, 0], 0);
        let out = apply_roll(&mut state, &board(), 3).unwrap();

        assert_eq!(out.redirect(), Some((LinkKind::Ladder, Cell::new(4), Cell::new(14))));
        assert_eq!(state.position(PlayerId::new(0)), Cell::new(14));
    }

    #[test]
    fn test_snake() {
        let mut state = at(&[14, 0], 0);
        let out = apply_roll(&mut state, &board(), 3).unwrap();

        assert_eq!(out.redirect(), Some((LinkKind::Snake, Cell::new(17), Cell::new(7))));
        assert_eq!(out.end, Cell::new(7));
    }

    #[test]
    fn test_link_on_entry_cell() {
        let board = Board::new(10, [(1, 38)]).unwrap();
        let mut state = GameState::new(2).unwrap();
        let out = apply_roll(&mut state, &board, 1).unwrap();

        assert_eq!(out.end, Cell::new(38));
        assert_eq!(out.events.len(), 3);
    }

    #[test]
    fn test_link_target_not_followed() {
        let board = Board::new(10, [(4, 14), (14, 2)]).unwrap();
        let mut state = at(&[1, 0], 0);
        let out = apply_roll(&mut state, &board, 3).unwrap();

        assert_eq!(out.end, Cell::new(14));
    }

    #[test]
    fn test_bust() {
        let mut state = at(&[98, 0], 0);
        let out = apply_roll(&mut state, &board(), 5).unwrap();

        assert_eq!(out.events.as_slice(), &[TurnEvent::Busted { position: Cell::new(98) }]);
        assert_eq!(state.position(PlayerId::new(0)), Cell::new(98));
        assert_eq!(state.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_exact_win() {
        let mut state = at(&[0, 97], 1);
        let out = apply_roll(&mut state, &board(), 3).unwrap();

        assert!(out.is_win());
        assert_eq!(state.status(), GameStatus::Won(PlayerId::new(1)));
        assert_eq!(state.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_small_board_ladder_then_win() {
        let board = Board::new(3, [(5, 8)]).unwrap();
        let mut state = at(&[2, 0], 0);

        let out = apply_roll(&mut state, &board, 3).unwrap();
        assert_eq!(out.end, Cell::new(8));
        assert!(state.in_progress());

        // player 1 fails to enter, then player 0 steps onto the final cell
        apply_roll(&mut state, &board, 4).unwrap();
        let out = apply_roll(&mut state, &board, 1).unwrap();
        assert!(out.is_win());
        assert_eq!(state.status(), GameStatus::Won(PlayerId::new(0)));
    }

    #[test]
    fn test_rejects_after_win() {
        let mut state = at(&[99, 0], 0);
        apply_roll(&mut state, &board(), 1).unwrap();

        let before = state.clone();
        let err = apply_roll(&mut state, &board(), 1).unwrap_err();
        assert_eq!(err, TurnError::GameOver { winner: PlayerId::new(0) });
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejects_bad_roll() {
        let mut state = GameState::new(2).unwrap();
        for roll in [0, 7, 255] {
            let err = apply_roll(&mut state, &board(), roll).unwrap_err();
            assert_eq!(err, TurnError::RollOutOfRange { roll });
        }
        assert_eq!(state, GameState::new(2).unwrap());
    }

    #[test]
    fn test_rejects_position_off_board() {
        let small = Board::new(3, []).unwrap();
        let mut state = at(&[50, 0], 0);

        let err = apply_roll(&mut state, &small, 1).unwrap_err();
        assert!(matches!(err, TurnError::PositionOffBoard { .. }));
    }

    #[test]
    fn test_bookkeeping() {
        let mut state = GameState::new(3).unwrap();
        let board = board();

        apply_roll(&mut state, &board, 1).unwrap();
        apply_roll(&mut state, &board, 6).unwrap();

        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.last_roll(), Some(6));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].player, PlayerId::new(1));
        assert_eq!(state.history()[1].turn, 2);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let state = at(&[1, 0], 0);
        let out = preview_roll(&state, &board(), 3).unwrap();

        assert_eq!(out.end, Cell::new(14));
        assert_eq!(state.position(PlayerId::new(0)), Cell::new(1));
        assert_eq!(state.turn_number(), 0);
    }
}
