//! Heroes: classes, stats, creation and lookup.
//!
//! - `HeroClass` / `AttackKind`: what a hero is and how it hits
//! - `Hero` / `Stats`: the mutable record kept on a roster
//! - `HeroFactory`: rolls stats and assigns ids
//! - `HeroQuery`: type-checked field lookup

pub mod class;
pub mod hero;
pub mod factory;
pub mod lookup;

pub use class::{AttackKind, HeroClass};
pub use hero::{Hero, Stats};
pub use factory::HeroFactory;
pub use lookup::{find_hero, HeroQuery};
