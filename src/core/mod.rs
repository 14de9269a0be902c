//! Core types: cells, players, state, events, dice, configuration.
//!
//! This module holds the data the turn engine reads and writes. None of it
//! performs I/O; configuration loading is an opt-in helper for drivers.

pub mod cell;
pub mod player;
pub mod rng;
pub mod config;
pub mod event;
pub mod state;

pub use cell::Cell;
pub use player::{Player, PlayerId, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedDice, DIE_FACES};
pub use config::{BoardConfig, GameConfig, DEFAULT_PLAYERS};
pub use event::{TurnEvent, TurnEvents, TurnOutcome};
pub use state::{GameState, GameStatus, MIN_PLAYERS};
