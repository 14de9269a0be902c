//! Snakes and ladders.

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Direction of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Target is below the source.
    Snake,
    /// Target is above the source.
    Ladder,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Snake => write!(f, "snake"),
            LinkKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// A redirect from one cell to another.
///
/// Self-links are rejected when the board is built, so every link is
/// either a snake or a ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Cell that triggers the link.
    pub from: Cell,
    /// Cell the piece ends up on.
    pub to: Cell,
}

impl Link {
    /// Create a new link.
    #[must_use]
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Snake or ladder, by direction.
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        if self.to < self.from {
            LinkKind::Snake
        } else {
            LinkKind::Ladder
        }
    }

    /// Cells gained (positive) or lost (negative) by taking this link.
    #[must_use]
    pub fn delta(&self) -> i16 {
        i16::from(self.to.number()) - i16::from(self.from.number())
    }
}
