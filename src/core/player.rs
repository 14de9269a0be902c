//! Player identification and per-player board state.
//!
//! ## PlayerId
//!
//! Type-safe seating index supporting up to 255 players. Seating order is
//! turn order.
//!
//! ## Player
//!
//! A seated player and the cell their piece occupies.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// `Display` is 1-based, matching how seats are announced to people.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A seated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat, fixed for the whole game.
    pub id: PlayerId,
    /// Current cell, [`Cell::START`] until the player rolls a 1.
    pub position: Cell,
}

impl Player {
    /// A player who has not yet entered the board.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: Cell::START,
        }
    }

    /// Has this player's piece entered the board?
    #[must_use]
    pub const fn on_board(&self) -> bool {
        !self.position.is_start()
    }
}
