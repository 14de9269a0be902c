//! Game sessions: the entry point drivers call.
//!
//! - `new_game`: validate the table and create a fresh `GameState`
//! - `Session`: owns a board, a state, and a dice source, and plays turns
//!
//! `apply_roll` is re-exported so drivers managing their own dice need only
//! this module.

mod game;

pub use game::{new_game, Session};
pub use crate::rules::apply_roll;
