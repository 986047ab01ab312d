//! Random number sources for stat rolls, critical hits and pairings.
//!
//! ## Key Features
//!
//! - **Injectable**: Every consumer takes `&mut impl RandomSource`, never a global
//! - **Deterministic**: `GameRng` with the same seed produces an identical sequence
//! - **Scriptable**: `ScriptedRng` replays fixed values to force exact outcomes
//!
//! ## Usage
//!
//! ```
//! use hero_arena::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_stat(20, 250);
//! assert!((20..=250).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_stat(1, 100), b.roll_stat(1, 100));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability interface for everything in the arena that needs randomness.
pub trait RandomSource {
    /// Uniform integer in the inclusive range `[min, max]`.
    ///
    /// Callers must ensure `min <= max`.
    fn roll_stat(&mut self, min: u32, max: u32) -> u32;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll_stat(&mut self, min: u32, max: u32) -> u32 {
        (**self).roll_stat(min, max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Seeded RNG backed by ChaCha8.
///
/// Fast and reproducible: an arena built from the same seed creates the same
/// roster and plays out the same duel.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so a run can be reported and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from, for reporting and replaying a run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll_stat(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max, "roll_stat called with min {min} > max {max}");
        self.inner.gen_range(min..=max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index called on an empty range");
        self.inner.gen_range(0..len)
    }
}

/// Replays pre-recorded values instead of drawing random ones.
///
/// Each queue is consumed front to back. An exhausted queue falls back to a
/// neutral value: `min` for stat rolls, `false` for chances and `0` for
/// indices. Rolls and indices are clamped into the requested range, so a
/// script can never produce an out-of-range value.
///
/// ```
/// use hero_arena::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new()
///     .with_rolls([100, 30])
///     .with_chances([true]);
///
/// assert_eq!(rng.roll_stat(20, 250), 100);
/// assert_eq!(rng.roll_stat(10, 50), 30);
/// assert!(rng.chance(0.2));
/// assert!(!rng.chance(0.2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<u32>,
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue values returned by `roll_stat`.
    #[must_use]
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue outcomes returned by `chance`.
    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Queue values returned by `pick_index`.
    #[must_use]
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len() + self.chances.len() + self.indices.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_stat(&mut self, min: u32, max: u32) -> u32 {
        self.rolls.pop_front().unwrap_or(min).clamp(min, max)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }
}
