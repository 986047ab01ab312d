//! The hero record and its stats.

use serde::{Deserialize, Serialize};

use super::class::{AttackKind, HeroClass};
use crate::core::HeroId;

/// A hero's numbers.
///
/// `health` goes down as the hero takes hits and never drops below 0.
/// `speed` is rolled and stored but no rule reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Stats {
    #[must_use]
    pub const fn new(health: u32, attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            health,
            attack,
            defense,
            speed,
        }
    }
}

/// A combatant on the roster.
///
/// The alive flag always equals `health > 0`. Health is only changed through
/// [`Hero::set_health`], which keeps the two in step. Deserializing goes
/// through [`Hero::new`] too, so stored `alive` and `attack_kind` values are
/// recomputed rather than trusted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HeroRecord")]
pub struct Hero {
    id: HeroId,
    name: String,
    class: HeroClass,
    attack_kind: AttackKind,
    stats: Stats,
    alive: bool,
}

impl Hero {
    /// Create a hero with explicit stats.
    ///
    /// The attack kind follows from `class`. Usually heroes come from a
    /// `HeroFactory`; this constructor is for fixed line-ups.
    #[must_use]
    pub fn new(id: HeroId, name: impl Into<String>, class: HeroClass, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            attack_kind: class.attack_kind(),
            stats,
            alive: stats.health > 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> HeroId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class(&self) -> HeroClass {
        self.class
    }

    #[must_use]
    pub fn attack_kind(&self) -> AttackKind {
        self.attack_kind
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.stats.health
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Set current health and recompute the alive flag.
    pub fn set_health(&mut self, health: u32) {
        self.stats.health = health;
        self.alive = health > 0;
    }
}

/// Serialized form of a hero: only the fields that are not derived.
#[derive(Deserialize)]
struct HeroRecord {
    id: HeroId,
    name: String,
    class: HeroClass,
    stats: Stats,
}

impl From<HeroRecord> for Hero {
    fn from(record: HeroRecord) -> Self {
        Hero::new(record.id, record.name, record.class, record.stats)
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} [{} / {}] HP {} ATK {} DEF {} SPD {}",
            self.id,
            self.name,
            self.class,
            self.attack_kind,
            self.stats.health,
            self.stats.attack,
            self.stats.defense,
            self.stats.speed,
        )?;
        if !self.alive {
            f.write_str(" (defeated)")?;
        }
        Ok(())
    }
}
