//! Combat: damage resolution and round sequencing.
//!
//! - `DamageRules` / `resolve_attack`: one hit, no mutation
//! - `run_round`: first strike, optional counter, narrative out

pub mod damage;
pub mod round;

pub use damage::{apply_damage, resolve_attack, AttackOutcome, DamageRules};
pub use round::{run_round, run_round_with, ALREADY_DEFEATED};
