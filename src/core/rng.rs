//! Seeded random source behind card dealing.
//!
//! Every dealt card is one bounded index draw. A game is reproducible from
//! the seed alone, and a `GameRngState` checkpoint resumes the stream from
//! the middle of a game without replaying earlier draws.
//!
//! ```
//! use roborally::core::GameRng;
//!
//! let mut live = GameRng::from_entropy();
//! let mut replay = GameRng::new(live.seed());
//! assert_eq!(live.index_below(6), replay.index_below(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream that remembers its seed.
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

    /// Seed from the thread RNG, keeping the seed for replays.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index_below(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot draw from an empty range");
        self.stream.gen_range(0..len)
    }

    /// Checkpoint of the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a stream from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(state.seed);
        stream.set_word_pos(state.word_pos);
        Self {
            stream,
            seed: state.seed,
        }
    }
}

/// Seed plus ChaCha8 word position; restoring is O(1) however many cards
/// were dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
