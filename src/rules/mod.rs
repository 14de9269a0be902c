//! Turn rules.
//!
//! `apply_roll` is the single authority that advances a game:
//! - Entry onto the board on an exact 1
//! - Movement, with overshoot forfeiting the move
//! - Snake/ladder redirection
//! - Win detection and turn rotation

pub mod engine;

pub use engine::{apply_roll, preview_roll};
