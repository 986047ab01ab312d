//! Arena configuration.
//!
//! The balance numbers are fixed defaults: stat ranges, critical-hit chance
//! and multiplier, and the round limit for a duel. Only the RNG seed is meant
//! to vary between runs, either through `with_seed` or the `ARENA_SEED`
//! environment variable.

use std::env;

use serde::{Deserialize, Serialize};

use super::error::ArenaError;

/// Environment variable holding an optional RNG seed.
pub const SEED_ENV: &str = "ARENA_SEED";

/// Inclusive range a stat is rolled from. `min` never exceeds `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatRangeRecord")]
pub struct StatRange {
    min: u32,
    max: u32,
}

impl StatRange {
    /// Create a range. Panics if `min` exceeds `max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "StatRange min must not exceed max");
        Self { min, max }
    }

    /// Create a range, rejecting `min > max`.
    pub fn try_new(min: u32, max: u32) -> Result<Self, ArenaError> {
        if min > max {
            return Err(ArenaError::InvalidStatRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Whether `value` lies inside the range (both ends included).
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Deserialize)]
struct StatRangeRecord {
    min: u32,
    max: u32,
}

impl TryFrom<StatRangeRecord> for StatRange {
    type Error = ArenaError;

    fn try_from(record: StatRangeRecord) -> Result<Self, Self::Error> {
        Self::try_new(record.min, record.max)
    }
}

/// Ranges used when rolling a new hero's stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanges {
    pub health: StatRange,
    pub attack: StatRange,
    pub defense: StatRange,
    pub speed: StatRange,
}

impl StatRanges {
    pub const HEALTH: StatRange = StatRange::new(20, 250);
    pub const ATTACK: StatRange = StatRange::new(20, 250);
    pub const DEFENSE: StatRange = StatRange::new(10, 50);
    pub const SPEED: StatRange = StatRange::new(20, 250);
}

impl Default for StatRanges {
    fn default() -> Self {
        Self {
            health: Self::HEALTH,
            attack: Self::ATTACK,
            defense: Self::DEFENSE,
            speed: Self::SPEED,
        }
    }
}

/// Arena configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Stat ranges for newly created heroes.
    pub stats: StatRanges,

    /// Probability that an attack is a critical hit (default: 0.2).
    pub crit_chance: f64,

    /// Damage multiplier for critical hits (default: 2).
    /// Applied after defense is subtracted.
    pub crit_multiplier: i64,

    /// Maximum rounds in one duel (default: 2). The first round is always
    /// played, so 0 behaves like 1.
    pub max_rounds: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            stats: StatRanges::default(),
            crit_chance: 0.2,
            crit_multiplier: 2,
            max_rounds: 2,
        }
    }
}

impl ArenaConfig {
    /// Default config, with the seed taken from `ARENA_SEED` when it is set
    /// and parses as a `u64`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>(SEED_ENV) {
            config.seed = Some(seed);
        }

        config
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom round limit. At least one round is
    /// played whatever the limit.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArenaConfig::default();
        assert_eq!(config.seed, None);
        assert!((config.crit_chance - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.crit_multiplier, 2);
        assert_eq!(config.max_rounds, 2);
    }

    #[test]
    fn test_default_ranges() {
        let ranges = StatRanges::default();
        assert_eq!(ranges.health, StatRange::new(20, 250));
        assert_eq!(ranges.attack, StatRange::new(20, 250));
        assert_eq!(ranges.defense, StatRange::new(10, 50));
        assert_eq!(ranges.speed, StatRange::new(20, 250));
    }

    #[test]
    fn test_range_contains() {
        let range = StatRange::new(10, 50);
        assert!(range.contains(10));
        assert!(range.contains(50));
        assert!(!range.contains(9));
        assert!(!range.contains(51));
    }

    #[test]
    fn test_try_new_rejects_inverted_range() {
        assert_eq!(StatRange::try_new(5, 5), Ok(StatRange::new(5, 5)));
        assert_eq!(
            StatRange::try_new(60, 50),
            Err(ArenaError::InvalidStatRange { min: 60, max: 50 })
        );
    }

    #[test]
    fn test_inverted_range_fails_to_deserialize() {
        let mut value = serde_json::to_value(ArenaConfig::default()).unwrap();
        value["stats"]["defense"] = serde_json::json!({ "min": 60, "max": 50 });

        let err = serde_json::from_value::<ArenaConfig>(value).unwrap_err();
        assert!(err.to_string().contains("min 60 exceeds max 50"), "{err}");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArenaConfig::default().with_seed(123).with_max_rounds(5);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.max_rounds, 5);
    }

    #[test]
    fn test_serialization() {
        let config = ArenaConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ArenaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
