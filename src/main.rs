//! Command-line entry point: build the default roster and stage one duel.
//!
//! Narrative goes to stdout, logs to stderr. Set `ARENA_SEED` to replay a
//! run and `RUST_LOG=debug` to see every roll.

use anyhow::Result;
use hero_arena::{Arena, ArenaConfig, HeroClass, HeroQuery};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Filter from a `RUST_LOG`-style directive string, or `info` when it is
/// unset or does not parse.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let config = ArenaConfig::from_env();
    let mut arena = Arena::with_default_roster(config);
    info!(seed = arena.seed(), "arena ready");

    println!("Heroes created:");
    for hero in arena.roster() {
        println!("  {hero}");
    }

    match arena.find(&HeroQuery::Class(HeroClass::Mage)) {
        Some(hero) => println!("\nFirst mage found: {hero}"),
        None => println!("\nNo mage on the roster."),
    }

    let report = arena.exhibition()?;
    let name_of = |id| arena.hero(id).map_or("?", |h| h.name());

    println!(
        "\nRandomly chosen: {} vs {}",
        name_of(report.challenger),
        name_of(report.opponent)
    );
    for (i, narrative) in report.rounds.iter().enumerate() {
        println!("\nRound {}:\n{narrative}", i + 1);
    }

    match report.winner {
        Some(id) => println!("\n{} wins the duel.", name_of(id)),
        None => println!("\nBoth heroes are still standing."),
    }

    Ok(())
}
