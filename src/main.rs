//! Steppe Arena - Console battle runner
//!
//! Builds a roster, runs the round loop to completion, and renders
//! per-round status lines plus the final verdict. Supports seeded runs and
//! JSON output for scripted use.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use steppe_arena::arena::{run_battle, run_battle_observed, BattleOutcome, BattleReport};
use steppe_arena::combat::{Combatant, CombatantClass, RngDice};
use steppe_arena::core::{ArenaError, Result};

/// Console battle runner
#[derive(Parser, Debug)]
#[command(name = "steppe-arena")]
#[command(about = "Run a multi-party turn-based battle and report the survivors")]
struct Args {
    /// Comma-separated class list (player, warrior, archer, mage, demiurge,
    /// dwarf, crossbowman); defaults to the full six-class lineup
    #[arg(long)]
    roster: Option<String>,

    /// Maximum rounds before the battle is called
    #[arg(long, default_value_t = 100)]
    max_rounds: u32,

    /// Random seed for reproducible battles
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleSummary {
    outcome: BattleOutcome,
    rounds: u32,
    seed: u64,
    roster: Vec<CombatantSummary>,
}

#[derive(Serialize)]
struct CombatantSummary {
    name: String,
    description: &'static str,
    life: f64,
    magic: f64,
    position: i32,
    weapon: &'static str,
    durability: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("steppe_arena=info")
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut dice = RngDice(ChaCha8Rng::seed_from_u64(seed));
    tracing::info!(seed, "starting battle");

    let mut roster = match &args.roster {
        Some(spec) => parse_roster(spec)?,
        None => default_roster(),
    };

    match args.format.as_str() {
        "text" => {
            println!("=== НАЧАЛО ИГРЫ ===");
            let report = run_battle_observed(
                &mut roster,
                args.max_rounds,
                &mut dice,
                |round, roster| {
                    println!("\n=== Раунд {round} ===");
                    for combatant in roster {
                        print_status(combatant);
                    }
                },
            );
            print_verdict(&report);
        }
        "json" => {
            let report = run_battle(&mut roster, args.max_rounds, &mut dice);
            let summary = BattleSummary {
                outcome: report.outcome,
                rounds: report.rounds,
                seed,
                roster: roster.iter().map(summarize).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        other => return Err(ArenaError::UnknownFormat(other.to_string())),
    }

    Ok(())
}

/// The original six-class lineup, spaced five tiles apart.
fn default_roster() -> Vec<Combatant> {
    [
        CombatantClass::Warrior,
        CombatantClass::Archer,
        CombatantClass::Mage,
        CombatantClass::Dwarf,
        CombatantClass::Crossbowman,
        CombatantClass::Demiurge,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, class)| Combatant::new(class, i as i32 * 5, class.profile().description))
    .collect()
}

/// Parse `warrior,archer,...` into a roster. Repeated classes get ordinal
/// suffixes so every combatant keeps a distinct name.
fn parse_roster(spec: &str) -> Result<Vec<Combatant>> {
    let classes = spec
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<CombatantClass>)
        .collect::<Result<Vec<_>>>()?;

    if classes.len() < 2 {
        return Err(ArenaError::RosterTooSmall(classes.len()));
    }

    let mut seen_per_class = std::collections::HashMap::new();
    Ok(classes
        .into_iter()
        .enumerate()
        .map(|(i, class)| {
            let ordinal = seen_per_class
                .entry(class)
                .and_modify(|n| *n += 1)
                .or_insert(1u32);
            let description = class.profile().description;
            let name = if *ordinal == 1 {
                description.to_string()
            } else {
                format!("{description} {ordinal}")
            };
            Combatant::new(class, i as i32 * 5, name)
        })
        .collect())
}

fn summarize(combatant: &Combatant) -> CombatantSummary {
    CombatantSummary {
        name: combatant.name.clone(),
        description: combatant.description(),
        life: combatant.life,
        magic: combatant.magic,
        position: combatant.position,
        weapon: combatant.weapon.name(),
        durability: combatant.weapon.durability,
    }
}

fn print_status(combatant: &Combatant) {
    println!(
        "{} ({}): ❤️ {:.1} | 🔮 {:.0} | 📍 {} | ⚔️ {} ({:.0})",
        combatant.name,
        combatant.description(),
        combatant.life,
        combatant.magic,
        combatant.position,
        combatant.weapon.name(),
        combatant.weapon.durability,
    );
}

fn print_verdict(report: &BattleReport) {
    match &report.outcome {
        BattleOutcome::Victory { winner } => {
            println!("\n🎉 ПОБЕДИТЕЛЬ: {winner}!");
        }
        BattleOutcome::Draw { survivors } => {
            println!("\n🤝 НИЧЬЯ между:");
            for name in survivors {
                println!("  {name}");
            }
        }
        BattleOutcome::Wipeout => {
            println!("\n💀 ВСЕ ПОГИБЛИ!");
        }
    }
}
