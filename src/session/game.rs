//! Game entry points for drivers.

use tracing::info;

use crate::board::Board;
use crate::core::{GameConfig, GameRng, GameState, PlayerId, RandomSource, TurnOutcome};
use crate::error::{ConfigError, TurnError};
use crate::rules::apply_roll;

/// Start a game on `board` with every piece off the board.
///
/// Requires at least two players.
pub fn new_game(player_count: usize, board: &Board) -> Result<GameState, ConfigError> {
    let state = GameState::new(player_count)?;
    info!(
        player_count,
        size = board.size(),
        links = board.link_count(),
        "new game"
    );
    Ok(state)
}

/// A board, a game on it, and the dice that drive it.
///
/// `Session` owns everything one game needs, so a host running several
/// games keeps one `Session` per game.
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    board: Board,
    state: GameState,
    dice: R,
}

impl Session<GameRng> {
    /// Build a seeded session from configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.build_board()?;
        info!(seed = config.seed, "seeding dice");
        Self::new(board, config.player_count, GameRng::new(config.seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a game with custom dice.
    pub fn new(board: Board, player_count: usize, dice: R) -> Result<Self, ConfigError> {
        let state = new_game(player_count, &board)?;
        Ok(Self { board, state, dice })
    }

    /// Roll for the current player and apply the result.
    pub fn roll(&mut self) -> Result<TurnOutcome, TurnError> {
        if let Some(winner) = self.state.status().winner() {
            return Err(TurnError::GameOver { winner });
        }
        let face = self.dice.next();
        apply_roll(&mut self.state, &self.board, face)
    }

    /// Roll until someone wins or `max_turns` more turns have been played.
    ///
    /// Returns the winner, or `None` if the cap was hit first.
    pub fn play_to_end(&mut self, max_turns: u32) -> Result<Option<PlayerId>, TurnError> {
        for _ in 0..max_turns {
            if !self.state.in_progress() {
                break;
            }
            self.roll()?;
        }
        Ok(self.winner())
    }

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The game so far.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The dice.
    #[must_use]
    pub fn dice(&self) -> &R {
        &self.dice
    }

    /// Has someone won?
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.state.in_progress()
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.status().winner()
    }

    /// Take the board and final state, dropping the dice.
    #[must_use]
    pub fn into_parts(self) -> (Board, GameState) {
        (self.board, self.state)
    }
}
