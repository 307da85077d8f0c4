//! Terminal driver: seeds a grid and prints one frame per generation.

use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use life_automata::automaton::seed_random;
use life_automata::{Simulator, SimulationConfig};

#[derive(Debug, Parser)]
#[command(about = "Run Conway's Game of Life on a toroidal grid")]
struct Args {
    /// TOML file with simulation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 100)]
    generations: u64,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Fixed RNG seed for the initial population
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut sim = Simulator::headless(config.width, config.height)?;
    let born = seed_random(sim.grid_mut(), config.initial_population, &mut rng);
    info!(
        width = config.width,
        height = config.height,
        born,
        "starting simulation"
    );

    let interval = config.tick_interval();
    print!("{}", sim.grid());
    for _ in 0..args.generations {
        thread::sleep(interval);
        sim.advance();
        println!();
        print!("{}", sim.grid());
    }

    info!(
        generation = sim.generation(),
        alive = sim.grid().alive_count(),
        "finished"
    );
    Ok(())
}
