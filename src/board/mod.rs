//! Board geometry and snake/ladder links.
//!
//! ## Key Types
//!
//! - `Board`: size and link table, validated at construction
//! - `Link`: a single redirect between two cells
//! - `LinkKind`: snake (down) or ladder (up)

pub mod board;
pub mod link;

pub use board::{Board, CLASSIC_LADDERS, CLASSIC_SIZE, CLASSIC_SNAKES, MAX_SIZE, MIN_SIZE};
pub use link::{Link, LinkKind};
