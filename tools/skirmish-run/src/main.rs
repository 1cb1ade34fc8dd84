//! skirmish-run: headless battle runner.
//!
//! Usage:
//!   skirmish-run --scenario ranged-support --seed 7
//!   skirmish-run --file battle.json --ticks 9000 --json

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use skirmish_core::commands::SimCommand;
use skirmish_core::config::{ConfigError, Scenario};
use skirmish_core::constants::TICK_RATE;
use skirmish_core::enums::{BattleOutcome, BattlePhase, ScenarioId};
use skirmish_core::state::BattleSnapshot;
use skirmish_sim::{SimConfig, SimulationEngine};

/// Run a troop battle to completion without a renderer
#[derive(Parser, Debug)]
#[command(name = "skirmish-run", version, about, long_about = None)]
struct Args {
    /// Preset roster to fight with
    #[arg(short, long, value_enum, default_value_t = Preset::Duel)]
    scenario: Preset,

    /// JSON roster file; overrides --scenario
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Give up after this many ticks
    #[arg(short, long, default_value_t = TICK_RATE as u64 * 300)]
    ticks: u64,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Duel,
    RangedSupport,
    Skirmish,
}

impl From<Preset> for ScenarioId {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Duel => ScenarioId::Duel,
            Preset::RangedSupport => ScenarioId::RangedSupport,
            Preset::Skirmish => ScenarioId::Skirmish,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(&args) {
        error!(%err, "run failed");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        ..Default::default()
    });

    match &args.file {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| RunError::Io {
                path: path.clone(),
                source,
            })?;
            let roster = Scenario::from_json(&text)?;
            let ids = engine.load_scenario(&roster)?;
            info!(troops = ids.len(), path = %path.display(), "roster loaded");
        }
        None => engine.queue_command(SimCommand::SelectScenario {
            scenario: args.scenario.into(),
        }),
    }
    engine.queue_command(SimCommand::StartBattle);

    let mut snapshot = engine.tick();
    while snapshot.phase != BattlePhase::Finished && engine.time().tick < args.ticks {
        snapshot = engine.tick();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_summary(&snapshot);
    }
    Ok(())
}

fn print_summary(snapshot: &BattleSnapshot) {
    let result = match snapshot.outcome {
        BattleOutcome::Victory(team) => format!("{team:?} victory"),
        BattleOutcome::Draw => "draw".to_string(),
        BattleOutcome::Undecided => "undecided (tick limit reached)".to_string(),
    };
    let score = &snapshot.score;

    println!("Result:      {result}");
    println!(
        "Battle time: {:.2}s ({} ticks)",
        score.battle_time_secs, snapshot.time.tick
    );
    println!(
        "Standing:    {} attackers, {} defenders",
        score.attackers_alive, score.defenders_alive
    );
    println!(
        "Losses:      {} attackers, {} defenders",
        score.attackers_lost, score.defenders_lost
    );
    println!(
        "Projectiles: {} fired, {} lost",
        score.projectiles_fired, score.projectiles_lost
    );
    for troop in &snapshot.troops {
        println!(
            "  #{:<3} {:?} hp {}/{} at ({:.1}, {:.1})",
            troop.id.0,
            troop.team,
            troop.health,
            troop.max_health,
            troop.position.0.x,
            troop.position.0.z
        );
    }
}
