//! Core arena types: hero ids, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. Nothing here knows what a
//! hero or an attack is.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{HeroId, IdSequence};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{ArenaConfig, StatRange, StatRanges, SEED_ENV};
pub use error::ArenaError;
