//! Game configuration.
//!
//! Drivers describe a game with a `GameConfig`:
//! - `player_count`: seats at the table
//! - `board`: edge length plus snake and ladder lists
//! - `seed`: dice seed, so a configured game is reproducible
//!
//! The core never reads files on its own. `GameConfig::load` is provided for
//! drivers that keep their setup in TOML:
//!
//! ```toml
//! player_count = 3
//! seed = 7
//!
//! [board]
//! size = 10
//! snakes = [[17, 7], [54, 34]]
//! ladders = [[4, 14], [9, 31]]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::state::check_player_count;
use crate::board::{Board, CLASSIC_LADDERS, CLASSIC_SIZE, CLASSIC_SNAKES};
use crate::error::ConfigError;

/// Seats at the table in the standard game.
pub const DEFAULT_PLAYERS: usize = 4;

/// Board layout as written in configuration.
///
/// Snakes and ladders are listed separately for readability; after
/// validation both end up in the same link table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Cells per edge.
    pub size: u8,
    /// `(head, tail)` pairs.
    pub snakes: Vec<(u8, u8)>,
    /// `(foot, top)` pairs.
    pub ladders: Vec<(u8, u8)>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: CLASSIC_SIZE,
            snakes: CLASSIC_SNAKES.to_vec(),
            ladders: CLASSIC_LADDERS.to_vec(),
        }
    }
}

impl BoardConfig {
    /// A board with no links.
    #[must_use]
    pub fn empty(size: u8) -> Self {
        Self {
            size,
            snakes: Vec::new(),
            ladders: Vec::new(),
        }
    }

    /// Add a snake.
    #[must_use]
    pub fn with_snake(mut self, head: u8, tail: u8) -> Self {
        self.snakes.push((head, tail));
        self
    }

    /// Add a ladder.
    #[must_use]
    pub fn with_ladder(mut self, foot: u8, top: u8) -> Self {
        self.ladders.push((foot, top));
        self
    }

    /// Validate and build the board.
    ///
    /// The `snakes`/`ladders` split is a labelling convenience; a pair's
    /// kind on the built board is decided by its direction alone.
    pub fn build(&self) -> Result<Board, ConfigError> {
        Board::new(
            self.size,
            self.snakes.iter().chain(self.ladders.iter()).copied(),
        )
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Board layout.
    pub board: BoardConfig,

    /// Dice seed.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            board: BoardConfig::default(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the standard board.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set the board layout.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check player count and board layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_player_count(self.player_count)?;
        self.board.build().map(|_| ())
    }

    /// Validate and build the board.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        self.board.build()
    }
}
