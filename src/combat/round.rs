//! One exchange of blows between two heroes.
//!
//! `hero1` always strikes first. `hero2` counter-attacks only if it survived.
//! Both heroes are updated in place; the caller gets back the narrative.

use tracing::debug;

use super::damage::{AttackOutcome, DamageRules};
use crate::core::RandomSource;
use crate::heroes::Hero;

/// Narrative returned when a round is asked for with a fallen participant.
pub const ALREADY_DEFEATED: &str = "One or both heroes are already defeated.";

/// Run a round with the default damage rules.
///
/// ```
/// use hero_arena::combat::run_round;
/// use hero_arena::core::{HeroId, ScriptedRng};
/// use hero_arena::heroes::{Hero, HeroClass, Stats};
///
/// let mut axe = Hero::new(HeroId(1), "Axe", HeroClass::Warrior, Stats::new(50, 200, 10, 30));
/// let mut zeus = Hero::new(HeroId(2), "Zeus", HeroClass::Mage, Stats::new(50, 200, 10, 30));
/// let mut rng = ScriptedRng::new();
///
/// let narrative = run_round(&mut axe, &mut zeus, &mut rng);
///
/// assert_eq!(narrative, "Axe attacks Zeus for 190 damage.\nZeus is defeated!");
/// assert!(!zeus.is_alive());
/// ```
pub fn run_round(hero1: &mut Hero, hero2: &mut Hero, rng: &mut impl RandomSource) -> String {
    run_round_with(&DamageRules::default(), hero1, hero2, rng)
}

/// Run a round with explicit damage rules.
pub fn run_round_with(
    rules: &DamageRules,
    hero1: &mut Hero,
    hero2: &mut Hero,
    rng: &mut impl RandomSource,
) -> String {
    if !hero1.is_alive() || !hero2.is_alive() {
        debug!(
            hero1 = hero1.id().raw(),
            hero2 = hero2.id().raw(),
            "round skipped, participant already defeated"
        );
        return ALREADY_DEFEATED.to_string();
    }

    let mut lines = Vec::with_capacity(3);

    let strike = rules.resolve(hero1, hero2, rng);
    hero2.set_health(strike.remaining_health);
    lines.push(attack_line(hero1, hero2, "attacks", &strike));

    if strike.is_lethal() {
        lines.push(defeated_line(hero2));
        return lines.join("\n");
    }

    let counter = rules.resolve(hero2, hero1, rng);
    hero1.set_health(counter.remaining_health);
    lines.push(attack_line(hero2, hero1, "counter-attacks", &counter));

    if counter.is_lethal() {
        lines.push(defeated_line(hero1));
    }

    lines.join("\n")
}

fn attack_line(attacker: &Hero, defender: &Hero, verb: &str, outcome: &AttackOutcome) -> String {
    let crit = if outcome.is_critical { " (critical hit!)" } else { "" };
    format!(
        "{} {} {} for {} damage{}.",
        attacker.name(),
        verb,
        defender.name(),
        outcome.damage,
        crit
    )
}

fn defeated_line(hero: &Hero) -> String {
    format!("{} is defeated!", hero.name())
}
