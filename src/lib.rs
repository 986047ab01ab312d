//! # hero-arena
//!
//! A small turn-based duel simulator. Heroes get random stats, trade blows
//! with a chance of critical hits, and the arena narrates what happened.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Everything random goes through `RandomSource`.
//!    Seed a `GameRng` for reproducible runs, or script a `ScriptedRng` to
//!    force exact stats and critical hits.
//!
//! 2. **Owned State**: Hero ids come from an `IdSequence` owned by the
//!    `HeroFactory`, not a global counter.
//!
//! 3. **Errors Are Preconditions**: A lookup miss is `None` and a round with
//!    a defeated hero is a normal narrative. Only impossible requests, like
//!    pairing a roster of one, return `ArenaError`.
//!
//! ## Modules
//!
//! - `core`: Hero ids, RNG, configuration, errors
//! - `heroes`: Classes, stats, creation and lookup
//! - `combat`: Damage resolution and rounds
//! - `arena`: Roster, pair selection and duels

pub mod core;
pub mod heroes;
pub mod combat;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    HeroId, IdSequence,
    GameRng, RandomSource, ScriptedRng,
    ArenaConfig, StatRange, StatRanges,
    ArenaError,
};

pub use crate::heroes::{
    AttackKind, HeroClass, Hero, Stats, HeroFactory,
    HeroQuery, find_hero,
};

pub use crate::combat::{AttackOutcome, DamageRules, resolve_attack, run_round};

pub use crate::arena::{Arena, DuelReport, DEFAULT_ROSTER};
