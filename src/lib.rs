//! # snakes-ladders
//!
//! A deterministic turn engine for the snakes and ladders race-to-100 game.
//!
//! ## Design Principles
//!
//! 1. **Rules, not rendering**: The engine decides the resulting game state
//!    and reports what happened as an ordered list of `TurnEvent`s. How that
//!    is shown (text, animation, sound) is the driver's business.
//!
//! 2. **Injected dice**: The engine never draws random numbers. Drivers
//!    pull faces from a `RandomSource`, so any game can be replayed exactly.
//!
//! 3. **Explicit ownership**: Each game owns its `GameState`; there are no
//!    globals. `apply_roll` takes the state by `&mut` and is the only code
//!    that changes it.
//!
//! ## Modules
//!
//! - `core`: Cells, players, state, events, dice, configuration
//! - `board`: Board geometry and the snake/ladder table
//! - `rules`: `apply_roll`, the turn engine
//! - `session`: `new_game` and the `Session` driver helper
//! - `error`: `ConfigError` and `TurnError`
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{Board, ScriptedDice, Session, TurnEvent};
//!
//! let board = Board::new(10, [(4, 14)]).unwrap();
//! let dice = ScriptedDice::new([1, 6, 3]).unwrap();
//! let mut session = Session::new(board, 2, dice).unwrap();
//!
//! session.roll().unwrap(); // player 1 enters
//! session.roll().unwrap(); // player 2 needs a 1
//! let outcome = session.roll().unwrap(); // player 1 climbs 4 -> 14
//! assert!(matches!(outcome.events.last(), Some(TurnEvent::Redirected { .. })));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Cell, Player, PlayerId,
    GameRng, GameRngState, RandomSource, ScriptedDice,
    BoardConfig, GameConfig,
    TurnEvent, TurnEvents, TurnOutcome,
    GameState, GameStatus,
};

pub use crate::board::{Board, Link, LinkKind};

pub use crate::rules::{apply_roll, preview_roll};

pub use crate::session::{new_game, Session};

pub use crate::error::{ConfigError, TurnError};
