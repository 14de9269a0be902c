//! Turn events: what happened during one roll.
//!
//! A single roll can produce several events in sequence, for example a move
//! onto a ladder foot, the climb, and the win at the top. Drivers replay the
//! events in order to animate or announce them; the engine performs no I/O.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::player::PlayerId;
use crate::board::LinkKind;

/// One observable step of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Rolled the 1 needed to step onto the board.
    EnteredBoard,
    /// Rolled anything but 1 while off the board.
    FailedToEnter,
    /// Piece walked from one cell to another.
    Moved { from: Cell, to: Cell },
    /// Roll would have passed the final cell; the move was forfeited.
    Busted { position: Cell },
    /// Landed on a link source and was carried to its target.
    Redirected { kind: LinkKind, from: Cell, to: Cell },
    /// Reached the final cell.
    Won { player: PlayerId },
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::EnteredBoard => write!(f, "entered the board"),
            TurnEvent::FailedToEnter => write!(f, "needs a 1 to enter"),
            TurnEvent::Moved { from, to } => write!(f, "moved {} -> {}", from, to),
            TurnEvent::Busted { position } => write!(f, "overshot, stays on {}", position),
            TurnEvent::Redirected { kind, from, to } => write!(f, "{} {} -> {}", kind, from, to),
            TurnEvent::Won { player } => write!(f, "{} wins!", player),
        }
    }
}

/// Ordered events for one turn. Most turns produce one to three.
pub type TurnEvents = SmallVec<[TurnEvent; 4]>;

/// The result of applying one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Turn number (1-based) within the game.
    pub turn: u32,
    /// The player who rolled.
    pub player: PlayerId,
    /// The die face applied.
    pub roll: u8,
    /// Where the player's piece started this turn.
    pub start: Cell,
    /// Where the player's piece ended this turn.
    pub end: Cell,
    /// What happened, in order.
    pub events: TurnEvents,
}

impl TurnOutcome {
    /// Did this turn win the game?
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.events.iter().any(|e| matches!(e, TurnEvent::Won { .. }))
    }

    /// The snake or ladder taken this turn, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<(LinkKind, Cell, Cell)> {
        self.events.iter().find_map(|e| match *e {
            TurnEvent::Redirected { kind, from, to } => Some((kind, from, to)),
            _ => None,
        })
    }

    /// Did the piece change cells?
    #[must_use]
    pub fn moved(&self) -> bool {
        self.start != self.end
    }
}
