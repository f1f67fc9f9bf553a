//! Headless battle host.
//!
//! Loads content from a data directory, seats the roster from `match.ron`, and
//! plays the match to completion with a greedy policy.
//!
//! ```bash
//! cargo run -p battle-sim -- --data data --seed 7
//! RUST_LOG=battle_core=debug cargo run -p battle-sim -- --format json
//! ```

mod policy;

use std::path::PathBuf;

use anyhow::Result;
use battle_content::ContentFactory;
use battle_core::{
    BattleEngine, BattleEnv, ExecutionOutcome, MatchStatus, PcgRng, compute_state_root,
};
use clap::Parser;
use tracing::{info, warn};

/// Play a seeded match from a content directory
#[derive(Parser)]
#[command(name = "battle-sim")]
#[command(about = "Headless creature-battle simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing rules.toml, creatures.ron, items.ron and match.ron
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data: PathBuf,

    /// Match seed for every roll
    #[arg(short, long, default_value_t = 7)]
    seed: u64,

    /// Stop after this many rounds if the match is still running
    #[arg(long, default_value_t = 50)]
    max_rounds: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Result and survivors
    Summary,
    /// Full action log and final state as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let factory = ContentFactory::new(&cli.data);
    let config = factory.load_config()?;
    let catalog = factory.load_catalog()?;
    let mut state = factory.build_match(cli.seed, &catalog)?;
    info!(data = %cli.data.display(), seed = cli.seed, "match created");

    let rng = PcgRng;
    let env = BattleEnv::new(&config, &rng).with_catalog(&catalog);
    let mut engine = BattleEngine::new(&mut state);
    let mut log: Vec<ExecutionOutcome> = Vec::new();

    while !engine.state().status.is_finished() && engine.state().round().0 <= cli.max_rounds {
        let action = policy::choose(engine.state(), &catalog);
        match engine.execute(env, &action) {
            Ok(outcome) => {
                info!(
                    kind = %action.kind(),
                    actor = ?action.actor(),
                    nonce = engine.state().turn.nonce,
                    "action executed"
                );
                log.push(outcome);
            }
            Err(error) => {
                warn!(kind = %action.kind(), %error, "policy chose an invalid action, passing");
                engine.advance_turn()?;
            }
        }
    }

    let status = engine.state().status.clone();
    if !status.is_finished() {
        warn!(max_rounds = cli.max_rounds, "round limit reached without a result");
    }
    let root = hex::encode(compute_state_root(&state)?);

    match cli.format {
        OutputFormat::Summary => {
            match &status {
                MatchStatus::Finished(summary) => {
                    println!("Winner: {} ({})", summary.name, summary.player);
                    for survivor in &summary.survivors {
                        println!(
                            "  {} {}: {}/{}",
                            survivor.id, survivor.name, survivor.current_hp, survivor.base_power
                        );
                    }
                }
                MatchStatus::Draw => println!("Draw: the last combatants fell together"),
                MatchStatus::InProgress => {
                    println!("No result after {} rounds", cli.max_rounds);
                }
            }
            println!("Actions: {}", log.len());
            println!("State root: {root}");
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "seed": cli.seed,
                "status": status,
                "winner": status.winner(),
                "actions": log,
                "final_state": state,
                "state_root": root,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for the report.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
