//! reflex CLI - vacuum world で 3 つの戦略を動かすデモ
//!
//! Commands:
//! - `run`     - one episode of one strategy
//! - `compare` - every strategy over every initial configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reflex_core::ports::{IdGenerator, ProgramKind, SystemClock, UlidGenerator};

mod config;
mod episode;
mod programs;
mod vacuum;

use config::ScenarioConfig;
use episode::run_episode;
use programs::build_agent;
use vacuum::VacuumWorld;

#[derive(Parser)]
#[command(name = "reflex", about = "Percept → action agents in the vacuum world", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Scenario file (JSON)
    #[arg(short, long, global = true, env = "REFLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one episode
    Run {
        #[arg(short, long, value_enum, default_value_t = Strategy::ModelBasedReflex)]
        strategy: Strategy,

        /// Override the number of decision cycles
        #[arg(long)]
        steps: Option<u64>,

        /// Override the RNG seed for the initial world
        #[arg(long)]
        seed: Option<u64>,

        /// Print the episode report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Average score of every strategy over all initial configurations
    Compare {
        /// Override the number of decision cycles
        #[arg(long)]
        steps: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    TableDriven,
    SimpleReflex,
    ModelBasedReflex,
}

impl From<Strategy> for ProgramKind {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::TableDriven => ProgramKind::TableDriven,
            Strategy::SimpleReflex => ProgramKind::SimpleReflex,
            Strategy::ModelBasedReflex => ProgramKind::ModelBasedReflex,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ScenarioConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            strategy,
            steps,
            seed,
            json,
        } => {
            config.steps = steps.unwrap_or(config.steps);
            config.seed = seed.or(config.seed);
            config.validate()?;
            run(&config, strategy.into(), json)
        }
        Commands::Compare { steps } => {
            config.steps = steps.unwrap_or(config.steps);
            config.validate()?;
            compare(&config)
        }
    }
}

fn run(
    config: &ScenarioConfig,
    kind: ProgramKind,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut world = VacuumWorld::random(&mut rng, config.location, config.dirt.a, config.dirt.b);
    let initial = world.clone();

    let ids = UlidGenerator::new(SystemClock);
    let mut agent = build_agent(kind, config)?;
    let report = run_episode(
        ids.generate_episode_id(),
        ids.generate_agent_id(),
        &mut world,
        &mut agent,
        config.steps,
        &SystemClock,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} ({}) start: {initial}", report.episode_id, report.strategy);
    for record in &report.records {
        println!("  #{:<3} {} -> {:?}", record.cycle, record.percept, record.action);
    }
    if let Some(err) = &report.error {
        println!("  stopped: {err}");
    }
    println!("end: {world}  score: {}", report.score);
    Ok(())
}

fn compare(config: &ScenarioConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ids = UlidGenerator::new(SystemClock);
    let worlds = VacuumWorld::all_initial();

    println!("{:<20} {:>8} {:>10}", "strategy", "average", "unresolved");
    for kind in ProgramKind::ALL {
        let mut total = 0i64;
        let mut unresolved = 0usize;
        for initial in &worlds {
            let mut world = initial.clone();
            let mut agent = build_agent(kind, config)?;
            let report = run_episode(
                ids.generate_episode_id(),
                ids.generate_agent_id(),
                &mut world,
                &mut agent,
                config.steps,
                &SystemClock,
            );
            total += report.score;
            if !report.completed() {
                unresolved += 1;
            }
        }
        let average = total as f64 / worlds.len() as f64;
        println!("{:<20} {:>8.2} {:>10}", kind.to_string(), average, unresolved);
    }
    Ok(())
}
