//! Game state: player positions, turn order, and status.
//!
//! `GameState` is plain data. The only code that mutates it is
//! [`apply_roll`](crate::rules::apply_roll); everything else reads.
//!
//! The turn history uses an `im` persistent vector so a driver can clone the
//! state every turn (undo stacks, spectators) without copying the history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::event::TurnOutcome;
use super::player::{Player, PlayerId, MAX_PLAYERS};
use crate::error::ConfigError;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Rolls are still accepted.
    InProgress,
    /// A player reached the final cell.
    Won(PlayerId),
}

impl GameStatus {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameStatus::Won(p) if *p == player)
    }

    /// The winner, if the game is decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(p) => Some(*p),
            GameStatus::InProgress => None,
        }
    }
}

/// Mutable record of one game.
///
/// Deserializing runs the same table checks as [`GameState::from_positions`],
/// so a loaded save can always be handed to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct GameState {
    players: Vec<Player>,
    current_player: PlayerId,
    status: GameStatus,
    last_roll: Option<u8>,
    turn_number: u32,
    history: Vector<TurnOutcome>,
}

impl GameState {
    /// Create a new game with every piece off the board and player 1 to roll.
    pub fn new(player_count: usize) -> Result<Self, ConfigError> {
        check_player_count(player_count)?;

        Ok(Self {
            players: PlayerId::all(player_count).map(Player::new).collect(),
            current_player: PlayerId::new(0),
            status: GameStatus::InProgress,
            last_roll: None,
            turn_number: 0,
            history: Vector::new(),
        })
    }

    /// Set up a game mid-play, with the given piece positions and player to move.
    ///
    /// Positions are checked against the board when the next roll is applied.
    pub fn from_positions(positions: &[Cell], current_player: PlayerId) -> Result<Self, ConfigError> {
        let mut state = Self::new(positions.len())?;
        check_seat(current_player, positions.len())?;
        for (player, &position) in state.players.iter_mut().zip(positions) {
            player.position = position;
        }
        state.current_player = current_player;
        Ok(state)
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player's current cell.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not seated at this table. Every `PlayerId`
    /// handed out by the state or the engine is seated.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Cell {
        self.players[player.index()].position
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Is the game still accepting rolls?
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// The most recently applied die face.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Number of turns applied so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every turn applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnOutcome> {
        &self.history
    }

    // === Engine-only mutation ===

    pub(crate) fn set_position(&mut self, player: PlayerId, cell: Cell) {
        self.players[player.index()].position = cell;
    }

    pub(crate) fn begin_turn(&mut self, roll: u8) -> u32 {
        self.last_roll = Some(roll);
        self.turn_number += 1;
        self.turn_number
    }

    pub(crate) fn declare_winner(&mut self, player: PlayerId) {
        self.status = GameStatus::Won(player);
    }

    pub(crate) fn pass_turn(&mut self) {
        let next = (self.current_player.index() + 1) % self.players.len();
        // seat count is capped at MAX_PLAYERS, so the index fits a u8
        self.current_player = PlayerId::new(next as u8);
    }

    pub(crate) fn record(&mut self, outcome: TurnOutcome) {
        self.history.push_back(outcome);
    }
}

/// Serialized form of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct SavedState {
    players: Vec<Player>,
    current_player: PlayerId,
    status: GameStatus,
    last_roll: Option<u8>,
    turn_number: u32,
    history: Vector<TurnOutcome>,
}

impl TryFrom<SavedState> for GameState {
    type Error = ConfigError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let count = saved.players.len();
        check_player_count(count)?;
        check_seat(saved.current_player, count)?;
        if let GameStatus::Won(winner) = saved.status {
            check_seat(winner, count)?;
        }
        for (seat, player) in saved.players.iter().enumerate() {
            if player.id.index() != seat {
                return Err(ConfigError::SeatOrder {
                    seat,
                    found: player.id,
                });
            }
        }

        Ok(Self {
            players: saved.players,
            current_player: saved.current_player,
            status: saved.status,
            last_roll: saved.last_roll,
            turn_number: saved.turn_number,
            history: saved.history,
        })
    }
}

fn check_seat(player: PlayerId, count: usize) -> Result<(), ConfigError> {
    if player.index() < count {
        Ok(())
    } else {
        Err(ConfigError::NoSuchSeat { player, count })
    }
}

pub(crate) fn check_player_count(count: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}
