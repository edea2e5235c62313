//! Rune sources: where fresh runes come from.
//!
//! The engine never calls a global RNG. Every rune it places (initial fill
//! and refill after compaction) is drawn from an injected [`RuneSource`].
//!
//! - [`GameRng`]: seeded ChaCha8, uniform over the six runes. Same seed,
//!   same boards and refills.
//! - [`ScriptedRunes`]: replays a fixed list, for tests and scripted puzzles.
//!
//! ```
//! use rune_match::core::{GameRng, RuneSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! for _ in 0..32 {
//!     assert_eq!(a.next_rune(), b.next_rune());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::rune::RuneType;

/// Supplies rune types for the board. Draws are independent.
pub trait RuneSource {
    /// Draw the next rune.
    fn next_rune(&mut self) -> RuneType;
}

impl<S: RuneSource + ?Sized> RuneSource for &mut S {
    fn next_rune(&mut self) -> RuneType {
        (**self).next_rune()
    }
}

/// Deterministic RNG for board generation and refills.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for checkpointing.
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

impl RuneSource for GameRng {
    fn next_rune(&mut self) -> RuneType {
        RuneType::ALL[self.gen_range_usize(0..RuneType::COUNT)]
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many runes have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the RNG was created with
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed rune sequence, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedRunes {
    runes: Vec<RuneType>,
    next: usize,
}

impl ScriptedRunes {
    /// Create a scripted source. The list must not be empty.
    pub fn new(runes: impl Into<Vec<RuneType>>) -> Result<Self, EngineError> {
        let runes = runes.into();
        if runes.is_empty() {
            return Err(EngineError::config("scripted rune source needs at least one rune"));
        }
        Ok(Self { runes, next: 0 })
    }

    /// Cycle through all six rune kinds in index order.
    #[must_use]
    pub fn cycling() -> Self {
        Self {
            runes: RuneType::ALL.to_vec(),
            next: 0,
        }
    }

    /// Number of runes drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RuneSource for ScriptedRunes {
    fn next_rune(&mut self) -> RuneType {
        let rune = self.runes[self.next % self.runes.len()];
        self.next += 1;
        rune
    }
}
