//! Finding heroes by field value.
//!
//! A `HeroQuery` names one field and carries a value of that field's type,
//! so asking for `Health("ten")` or `Class(3)` does not compile.

use serde::{Deserialize, Serialize};

use super::class::{AttackKind, HeroClass};
use super::hero::Hero;
use crate::core::HeroId;

/// Field selector plus the value it must equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroQuery {
    Id(HeroId),
    Name(String),
    Class(HeroClass),
    AttackKind(AttackKind),
    Alive(bool),
    Health(u32),
    Attack(u32),
    Defense(u32),
    Speed(u32),
}

impl HeroQuery {
    /// Query by name.
    pub fn name(name: impl Into<String>) -> Self {
        HeroQuery::Name(name.into())
    }

    /// Whether `hero`'s selected field equals the query value.
    #[must_use]
    pub fn matches(&self, hero: &Hero) -> bool {
        let stats = hero.stats();
        match self {
            HeroQuery::Id(id) => hero.id() == *id,
            HeroQuery::Name(name) => hero.name() == name,
            HeroQuery::Class(class) => hero.class() == *class,
            HeroQuery::AttackKind(kind) => hero.attack_kind() == *kind,
            HeroQuery::Alive(alive) => hero.is_alive() == *alive,
            HeroQuery::Health(v) => stats.health == *v,
            HeroQuery::Attack(v) => stats.attack == *v,
            HeroQuery::Defense(v) => stats.defense == *v,
            HeroQuery::Speed(v) => stats.speed == *v,
        }
    }
}

/// First hero in `heroes` matching `query`, in collection order.
///
/// ```
/// use hero_arena::core::HeroId;
/// use hero_arena::heroes::{find_hero, Hero, HeroClass, HeroQuery, Stats};
///
/// let roster = vec![
///     Hero::new(HeroId(1), "Axe", HeroClass::Warrior, Stats::new(100, 50, 20, 40)),
///     Hero::new(HeroId(2), "Zeus", HeroClass::Mage, Stats::new(80, 70, 15, 60)),
/// ];
///
/// let mage = find_hero(&roster, &HeroQuery::Class(HeroClass::Mage));
/// assert_eq!(mage.map(|h| h.name()), Some("Zeus"));
///
/// assert!(find_hero(&roster, &HeroQuery::Class(HeroClass::Archer)).is_none());
/// ```
#[must_use]
pub fn find_hero<'a>(heroes: &'a [Hero], query: &HeroQuery) -> Option<&'a Hero> {
    heroes.iter().find(|hero| query.matches(hero))
}
