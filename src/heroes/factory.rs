//! Hero creation with rolled stats.

use tracing::debug;

use super::class::HeroClass;
use super::hero::{Hero, Stats};
use crate::core::{IdSequence, RandomSource, StatRanges};

/// Builds heroes with random stats and sequential ids.
///
/// The factory owns the id sequence, so every hero it creates gets the next
/// id in creation order. Randomness is passed in per call.
///
/// ```
/// use hero_arena::core::{GameRng, HeroId};
/// use hero_arena::heroes::{HeroClass, HeroFactory};
///
/// let mut rng = GameRng::new(42);
/// let mut factory = HeroFactory::new();
///
/// let axe = factory.create_hero("Axe", HeroClass::Warrior, &mut rng);
/// let zeus = factory.create_hero("Zeus", HeroClass::Mage, &mut rng);
///
/// assert_eq!(axe.id(), HeroId(1));
/// assert_eq!(zeus.id(), HeroId(2));
/// assert!(axe.is_alive());
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeroFactory {
    ranges: StatRanges,
    ids: IdSequence,
}

impl HeroFactory {
    /// Factory with the default stat ranges and ids starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory with custom stat ranges.
    #[must_use]
    pub fn with_ranges(ranges: StatRanges) -> Self {
        Self {
            ranges,
            ids: IdSequence::new(),
        }
    }

    /// Stat ranges new heroes are rolled from.
    #[must_use]
    pub fn ranges(&self) -> &StatRanges {
        &self.ranges
    }

    /// Roll a full stat block: health, attack, defense, speed, in that order.
    pub fn roll_stats(&self, rng: &mut impl RandomSource) -> Stats {
        let r = &self.ranges;
        let health = rng.roll_stat(r.health.min(), r.health.max());
        let attack = rng.roll_stat(r.attack.min(), r.attack.max());
        let defense = rng.roll_stat(r.defense.min(), r.defense.max());
        let speed = rng.roll_stat(r.speed.min(), r.speed.max());
        Stats::new(health, attack, defense, speed)
    }

    /// Create a hero with rolled stats and the next id.
    pub fn create_hero(
        &mut self,
        name: impl Into<String>,
        class: HeroClass,
        rng: &mut impl RandomSource,
    ) -> Hero {
        let stats = self.roll_stats(rng);
        let mut hero = Hero::new(self.ids.next_id(), name, class, stats);
        // Heroes always enter alive, even from a zero-health range.
        if !hero.is_alive() {
            hero.set_health(1);
        }

        debug!(
            id = hero.id().raw(),
            name = hero.name(),
            class = %class,
            health = hero.health(),
            attack = stats.attack,
            defense = stats.defense,
            speed = stats.speed,
            "hero created"
        );

        hero
    }
}
