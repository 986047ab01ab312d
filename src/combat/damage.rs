//! Damage calculation.
//!
//! # Formula
//!
//! ```text
//! base = attacker.attack - defender.defense     (may be negative)
//! if critical: base *= crit_multiplier
//! damage = max(base, 0)
//! remaining = max(defender.health - damage, 0)
//! ```
//!
//! The multiplier applies after defense is subtracted, so a negative base
//! stays at 0 even on a critical hit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ArenaConfig, RandomSource};
use crate::heroes::Hero;

/// Result of one attack. Produced by resolution, applied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Damage dealt (never negative).
    pub damage: u32,
    /// Whether the hit was critical.
    pub is_critical: bool,
    /// Defender's health after the hit, floored at 0.
    pub remaining_health: u32,
}

impl AttackOutcome {
    /// Whether this hit takes the defender to 0 health.
    #[must_use]
    pub fn is_lethal(&self) -> bool {
        self.remaining_health == 0
    }
}

/// Critical-hit parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageRules {
    /// Probability that an attack is critical.
    pub crit_chance: f64,
    /// Multiplier applied to the base damage on a critical hit.
    pub crit_multiplier: i64,
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            crit_chance: 0.2,
            crit_multiplier: 2,
        }
    }
}

impl From<&ArenaConfig> for DamageRules {
    fn from(config: &ArenaConfig) -> Self {
        Self {
            crit_chance: config.crit_chance,
            crit_multiplier: config.crit_multiplier,
        }
    }
}

impl DamageRules {
    /// Damage for a given attack and defense, before health is considered.
    #[must_use]
    pub fn calculate_damage(&self, attack: u32, defense: u32, is_critical: bool) -> u32 {
        let mut base = i64::from(attack) - i64::from(defense);
        if is_critical {
            base = base.saturating_mul(self.crit_multiplier);
        }
        base.clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Resolve `attacker` hitting `defender`.
    ///
    /// Rolls for a critical hit, then computes damage and the defender's
    /// remaining health. Neither hero is modified.
    pub fn resolve(
        &self,
        attacker: &Hero,
        defender: &Hero,
        rng: &mut impl RandomSource,
    ) -> AttackOutcome {
        let is_critical = rng.chance(self.crit_chance);
        let damage = self.calculate_damage(
            attacker.stats().attack,
            defender.stats().defense,
            is_critical,
        );
        let remaining_health = apply_damage(defender.health(), damage);

        debug!(
            attacker = attacker.id().raw(),
            defender = defender.id().raw(),
            damage,
            is_critical,
            remaining_health,
            "attack resolved"
        );

        AttackOutcome {
            damage,
            is_critical,
            remaining_health,
        }
    }
}

/// Resolve an attack with the default rules (20% chance of double damage).
pub fn resolve_attack(
    attacker: &Hero,
    defender: &Hero,
    rng: &mut impl RandomSource,
) -> AttackOutcome {
    DamageRules::default().resolve(attacker, defender, rng)
}

/// Health left after taking `damage`, clamped to 0.
#[must_use]
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}
