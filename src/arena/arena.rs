//! The arena: a roster of heroes plus the RNG and rules used to fight.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::combat::{run_round_with, DamageRules};
use crate::core::{ArenaConfig, ArenaError, GameRng, HeroId, RandomSource};
use crate::heroes::{find_hero, Hero, HeroClass, HeroFactory, HeroQuery};

/// The line-up created by [`Arena::with_default_roster`].
pub const DEFAULT_ROSTER: [(&str, HeroClass); 6] = [
    ("Axe", HeroClass::Warrior),
    ("Zeus", HeroClass::Mage),
    ("Windranger", HeroClass::Archer),
    ("Phantom Assassin", HeroClass::Warrior),
    ("Invoker", HeroClass::Mage),
    ("Sniper", HeroClass::Archer),
];

/// What happened in a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelReport {
    /// The hero who struck first each round.
    pub challenger: HeroId,
    /// The hero who answered.
    pub opponent: HeroId,
    /// Narrative of each round that was fought, in order.
    pub rounds: Vec<String>,
    /// The survivor, if the duel ended with exactly one hero standing.
    pub winner: Option<HeroId>,
}

impl DuelReport {
    /// Whether both heroes were still standing when the duel ended.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Owns the roster and everything needed to stage duels on it.
///
/// Generic over the random source so a scripted one can be dropped in.
///
/// ```
/// use hero_arena::arena::Arena;
/// use hero_arena::core::ArenaConfig;
///
/// let mut arena = Arena::with_default_roster(ArenaConfig::default().with_seed(42));
/// assert_eq!(arena.roster().len(), 6);
///
/// let report = arena.exhibition().unwrap();
/// assert_ne!(report.challenger, report.opponent);
/// assert!(!report.rounds.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Arena<R = GameRng> {
    config: ArenaConfig,
    rules: DamageRules,
    factory: HeroFactory,
    rng: R,
    roster: Vec<Hero>,
}

impl Arena<GameRng> {
    /// Empty arena seeded from `config.seed`, or from entropy when unset.
    #[must_use]
    pub fn new(config: ArenaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Arena holding the six default heroes.
    #[must_use]
    pub fn with_default_roster(config: ArenaConfig) -> Self {
        let mut arena = Self::new(config);
        for (name, class) in DEFAULT_ROSTER {
            arena.recruit(name, class);
        }
        arena
    }

    /// The seed in use, for replaying the run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Arena<R> {
    /// Empty arena drawing randomness from `rng`.
    pub fn with_rng(config: ArenaConfig, rng: R) -> Self {
        Self {
            rules: DamageRules::from(&config),
            factory: HeroFactory::with_ranges(config.stats),
            config,
            rng,
            roster: Vec::new(),
        }
    }

    /// Configuration the arena was built with.
    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Heroes in recruitment order.
    #[must_use]
    pub fn roster(&self) -> &[Hero] {
        &self.roster
    }

    /// Create a hero with rolled stats and add it to the roster.
    pub fn recruit(&mut self, name: impl Into<String>, class: HeroClass) -> HeroId {
        let hero = self.factory.create_hero(name, class, &mut self.rng);
        let id = hero.id();
        self.roster.push(hero);
        id
    }

    /// Look a hero up by id.
    #[must_use]
    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.find(&HeroQuery::Id(id))
    }

    /// First roster hero matching `query`.
    #[must_use]
    pub fn find(&self, query: &HeroQuery) -> Option<&Hero> {
        find_hero(&self.roster, query)
    }

    /// Pick two different roster slots at random.
    ///
    /// Redraws the second slot until it differs from the first.
    pub fn pick_pair(&mut self) -> Result<(usize, usize), ArenaError> {
        let size = self.roster.len();
        if size < 2 {
            return Err(ArenaError::RosterTooSmall { size });
        }

        let first = self.rng.pick_index(size);
        let mut second = self.rng.pick_index(size);
        while second == first {
            trace!(index = first, "picked the same hero twice, redrawing");
            second = self.rng.pick_index(size);
        }

        Ok((first, second))
    }

    /// Fight up to `max_rounds` rounds between the heroes at `first` and
    /// `second`. The first round is always played, even with a limit of 0;
    /// later rounds only while both heroes are alive.
    pub fn duel(&mut self, first: usize, second: usize) -> Result<DuelReport, ArenaError> {
        let size = self.roster.len();
        for index in [first, second] {
            if index >= size {
                return Err(ArenaError::HeroIndexOutOfRange { index, size });
            }
        }
        if first == second {
            return Err(ArenaError::SameHero { index: first });
        }

        let (hero1, hero2) = pair_mut(&mut self.roster, first, second);
        info!(
            challenger = hero1.name(),
            opponent = hero2.name(),
            "duel started"
        );

        let mut rounds = Vec::new();
        for round in 0..self.config.max_rounds.max(1) {
            if round > 0 && !(hero1.is_alive() && hero2.is_alive()) {
                break;
            }
            rounds.push(run_round_with(&self.rules, hero1, hero2, &mut self.rng));
        }

        let winner = match (hero1.is_alive(), hero2.is_alive()) {
            (true, false) => Some(hero1.id()),
            (false, true) => Some(hero2.id()),
            _ => None,
        };

        info!(
            rounds = rounds.len(),
            winner = ?winner,
            "duel finished"
        );

        Ok(DuelReport {
            challenger: hero1.id(),
            opponent: hero2.id(),
            rounds,
            winner,
        })
    }

    /// Pick two random heroes and make them duel.
    pub fn exhibition(&mut self) -> Result<DuelReport, ArenaError> {
        let (first, second) = self.pick_pair()?;
        self.duel(first, second)
    }
}

/// Mutable references to two distinct slots. Callers guarantee `a != b`.
fn pair_mut(heroes: &mut [Hero], a: usize, b: usize) -> (&mut Hero, &mut Hero) {
    if a < b {
        let (left, right) = heroes.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = heroes.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    fn scripted_arena(rng: ScriptedRng, names: &[&str]) -> Arena<ScriptedRng> {
        let mut arena = Arena::with_rng(ArenaConfig::default(), rng);
        for name in names {
            arena.recruit(*name, HeroClass::Warrior);
        }
        arena
    }

    #[test]
    fn test_default_roster() {
        let arena = Arena::with_default_roster(ArenaConfig::default().with_seed(1));
        let names: Vec<_> = arena.roster().iter().map(Hero::name).collect();

        assert_eq!(
            names,
            ["Axe", "Zeus", "Windranger", "Phantom Assassin", "Invoker", "Sniper"]
        );
        for (i, hero) in arena.roster().iter().enumerate() {
            assert_eq!(hero.id(), HeroId(i as u32 + 1));
        }
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = Arena::with_default_roster(ArenaConfig::default().with_seed(5));
        let b = Arena::with_default_roster(ArenaConfig::default().with_seed(5));
        assert_eq!(a.roster(), b.roster());
        assert_eq!(a.seed(), 5);
    }

    #[test]
    fn test_recruit_returns_id() {
        let mut arena = Arena::with_rng(ArenaConfig::default(), ScriptedRng::new());
        let id = arena.recruit("Lina", HeroClass::Mage);

        assert_eq!(id, HeroId(1));
        assert_eq!(arena.hero(id).map(Hero::name), Some("Lina"));
        assert!(arena.hero(HeroId(2)).is_none());
    }

    #[test]
    fn test_pick_pair_too_small() {
        let mut empty = scripted_arena(ScriptedRng::new(), &[]);
        assert_eq!(empty.pick_pair(), Err(ArenaError::RosterTooSmall { size: 0 }));

        let mut single = scripted_arena(ScriptedRng::new(), &["Solo"]);
        assert_eq!(single.pick_pair(), Err(ArenaError::RosterTooSmall { size: 1 }));
    }

    #[test]
    fn test_pick_pair_redraws_duplicates() {
        let rng = ScriptedRng::new().with_indices([2, 2, 2, 0]);
        let mut arena = scripted_arena(rng, &["A", "B", "C"]);

        assert_eq!(arena.pick_pair(), Ok((2, 0)));
    }

    #[test]
    fn test_pick_pair_always_distinct() {
        let mut arena = Arena::with_default_roster(ArenaConfig::default().with_seed(11));
        for _ in 0..200 {
            let (a, b) = arena.pick_pair().unwrap();
            assert_ne!(a, b);
            assert!(a < 6 && b < 6);
        }
    }

    #[test]
    fn test_duel_rejects_bad_indices() {
        let mut arena = scripted_arena(ScriptedRng::new(), &["A", "B"]);

        assert_eq!(
            arena.duel(0, 5),
            Err(ArenaError::HeroIndexOutOfRange { index: 5, size: 2 })
        );
        assert_eq!(arena.duel(1, 1), Err(ArenaError::SameHero { index: 1 }));
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut arena = scripted_arena(ScriptedRng::new(), &["A", "B", "C"]);

        let (x, y) = pair_mut(&mut arena.roster, 2, 0);
        assert_eq!((x.name(), y.name()), ("C", "A"));

        let (x, y) = pair_mut(&mut arena.roster, 0, 1);
        assert_eq!((x.name(), y.name()), ("A", "B"));
    }

    #[test]
    fn test_duel_stops_after_defeat() {
        // A: 250 HP / 250 ATK / 10 DEF, B: 20 HP / 20 ATK / 10 DEF
        let rng = ScriptedRng::new().with_rolls([250, 250, 10, 100, 20, 20, 10, 100]);
        let mut arena = scripted_arena(rng, &["A", "B"]);

        let report = arena.duel(0, 1).unwrap();

        assert_eq!(report.rounds.len(), 1);
        assert_eq!(report.winner, Some(HeroId(1)));
        assert!(!report.is_draw());
        assert!(!arena.roster()[1].is_alive());
    }

    #[test]
    fn test_duel_runs_max_rounds_when_both_survive() {
        // Both heroes: 250 HP / 20 ATK / 50 DEF, no damage possible
        let rng = ScriptedRng::new().with_rolls([250, 20, 50, 100, 250, 20, 50, 100]);
        let mut arena = scripted_arena(rng, &["A", "B"]);

        let report = arena.duel(1, 0).unwrap();

        assert_eq!(report.challenger, HeroId(2));
        assert_eq!(report.opponent, HeroId(1));
        assert_eq!(report.rounds.len(), 2);
        assert!(report.is_draw());
    }

    #[test]
    fn test_duel_honors_max_rounds() {
        let rng = ScriptedRng::new().with_rolls([250, 20, 50, 100, 250, 20, 50, 100]);
        let mut arena = Arena::with_rng(ArenaConfig::default().with_max_rounds(4), rng);
        arena.recruit("A", HeroClass::Warrior);
        arena.recruit("B", HeroClass::Archer);

        let report = arena.duel(0, 1).unwrap();
        assert_eq!(report.rounds.len(), 4);
    }

    #[test]
    fn test_zero_round_limit_still_plays_one() {
        let rng = ScriptedRng::new().with_rolls([250, 20, 50, 100, 250, 20, 50, 100]);
        let mut arena = Arena::with_rng(ArenaConfig::default().with_max_rounds(0), rng);
        arena.recruit("A", HeroClass::Warrior);
        arena.recruit("B", HeroClass::Archer);

        let report = arena.duel(0, 1).unwrap();
        assert_eq!(report.rounds.len(), 1);
        assert_eq!(report.rounds[0], "A attacks B for 0 damage.\nB counter-attacks A for 0 damage.");
        assert!(report.is_draw());
    }

    #[test]
    fn test_report_serialization() {
        let report = DuelReport {
            challenger: HeroId(1),
            opponent: HeroId(2),
            rounds: vec!["A attacks B for 3 damage.".to_string()],
            winner: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: DuelReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
