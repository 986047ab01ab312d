//! The arena: roster management, pair selection and multi-round duels.
//!
//! This is the layer the binary drives. It wires a `HeroFactory`, a random
//! source and the damage rules from `ArenaConfig` around a roster of heroes.

mod arena;

pub use arena::{Arena, DuelReport, DEFAULT_ROSTER};
