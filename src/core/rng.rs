//! The game's single source of randomness.
//!
//! Die rolls, career and college draws, marriage flips and child counts
//! all pull from one seeded ChaCha8 stream owned by `GameState`. Replaying
//! a game with the same seed and the same answers replays it exactly.
//!
//! ```
//! use life_track::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die(6);
//! assert!((1..=6).contains(&roll));
//! assert_eq!(GameRng::new(42).roll_die(6), roll);
//! ```

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG for dice, draws and coin flips.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fair roll in `1..=sides`. A zero-sided die rolls 1.
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        self.stream.gen_range(1..=sides.max(1))
    }

    /// Uniform draw from `range`, e.g. a child count.
    pub fn gen_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.stream.gen_range(range)
    }

    /// Weighted coin flip. Odds outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, odds: f64) -> bool {
        self.stream.gen_bool(odds.clamp(0.0, 1.0))
    }

    /// Draw one card from a pool, `None` if the pool is empty.
    pub fn choose<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        pool.choose(&mut self.stream)
    }

    /// Snapshot the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }
}

/// Where a `GameRng` stream is, independent of how much it has produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
