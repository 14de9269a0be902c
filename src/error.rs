//! Error types.
//!
//! Every error here is a contract violation by the caller or a malformed
//! configuration. Nothing is retried internally; errors propagate to the
//! driver unchanged.

use std::path::PathBuf;

use crate::core::{Cell, PlayerId};

/// Errors raised while building a board, a game, or a dice source.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is outside the supported range {min}..={max}")]
    BoardSize { size: u8, min: u8, max: u8 },

    #[error("cell {cell} is outside the linkable range 1..={max}")]
    CellOutOfRange { cell: u8, max: u8 },

    #[error("cell {cell} links to itself")]
    SelfLink { cell: u8 },

    #[error("player count {count} is outside the supported range {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("{player} is not seated at a table of {count}")]
    NoSuchSeat { player: PlayerId, count: usize },

    #[error("seat {seat} holds {found}; players must be listed in seating order")]
    SeatOrder { seat: usize, found: PlayerId },

    #[error("scripted dice need at least one face")]
    EmptyScript,

    #[error("scripted die face {face} is not in 1..=6")]
    ScriptFace { face: u8 },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised by [`apply_roll`](crate::rules::apply_roll).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("game is already over ({winner} won)")]
    GameOver { winner: PlayerId },

    #[error("roll {roll} is not a die face (1..=6)")]
    RollOutOfRange { roll: u8 },

    #[error("{player} is at {position}, which is not on this board")]
    PositionOffBoard { player: PlayerId, position: Cell },
}
