//! Dice sources.
//!
//! The engine never draws random numbers itself. Drivers pull a face from a
//! [`RandomSource`] and hand it to [`apply_roll`](crate::rules::apply_roll),
//! so a game is fully reproducible given its roll sequence.
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8, same seed produces the same game
//! - [`ScriptedDice`]: a fixed sequence of faces, for tests and replays
//!
//! ```
//! use snakes_ladders::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next(), b.next());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Produces dice values.
///
/// Implementations must return a value in `1..=DIE_FACES`.
pub trait RandomSource {
    /// Roll the die once.
    fn next(&mut self) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self) -> u8 {
        (**self).next()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next(&mut self) -> u8 {
        (**self).next()
    }
}

/// Deterministic, uniformly distributed die.
///
/// Uses ChaCha8 for speed while keeping the sequence stable across
/// platforms. The stream position can be captured with [`GameRng::state`]
/// and resumed with [`GameRng::from_state`].
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces, wrapping around at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a script. Every face must be a valid die face.
    pub fn new(faces: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let faces = faces.into();
        if faces.is_empty() {
            return Err(ConfigError::EmptyScript);
        }
        if let Some(&face) = faces.iter().find(|&&f| !(1..=DIE_FACES).contains(&f)) {
            return Err(ConfigError::ScriptFace { face });
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// How many faces have been rolled so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDice {
    fn next(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
