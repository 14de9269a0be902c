//! Board cell numbering.
//!
//! Cells are numbered `1..=size*size`. Cell `0` is the virtual start
//! position for players who have not yet entered the board.

use serde::{Deserialize, Serialize};

/// A position on the board, or [`Cell::START`] when off the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell(pub u8);

impl Cell {
    /// The off-board start position.
    pub const START: Cell = Cell(0);

    /// Create a new cell.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the raw cell number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Has the player not yet entered the board?
    #[must_use]
    pub const fn is_start(self) -> bool {
        self.0 == 0
    }

    /// Advance by `steps` cells. Returns `None` if the result would pass `last`.
    #[must_use]
    pub fn advance(self, steps: u8, last: Cell) -> Option<Cell> {
        let next = self.0.checked_add(steps)?;
        (next <= last.0).then_some(Cell(next))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_start() {
            write!(f, "Start")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<u8> for Cell {
    fn from(number: u8) -> Self {
        Self(number)
    }
}
