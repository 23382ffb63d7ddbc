//! lifesim - CLI entry point.
//!
//! Batch Game of Life runner: parses a seed file, advances the world, writes
//! one text snapshot per generation. Every failure is fatal; errors propagate
//! out of `main` and abort the run.

use clap::{Parser, Subcommand};
use lifesim::snapshot::SnapshotWriter;
use lifesim::stats::StatsHistory;
use lifesim::{benchmark, Config, Seed, World};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lifesim")]
#[command(version)]
#[command(about = "Conway's Game of Life on a finite bounded grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a seed file
    Run {
        /// Seed file: "<width>:<height>" header, then one "<x>,<y>" per line
        seed: PathBuf,

        /// Generations to simulate (overrides the config file; must be > 0)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Output directory (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Grid width
        #[arg(long, default_value = "256")]
        width: usize,

        /// Grid height
        #[arg(long, default_value = "256")]
        height: usize,

        /// Number of generations
        #[arg(short, long, default_value = "100")]
        generations: u64,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seed,
            generations,
            config,
            output,
            quiet,
        } => run_simulation(seed, generations, config, output, quiet),

        Commands::Benchmark {
            width,
            height,
            generations,
        } => run_benchmark(width, height, generations),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    seed_path: PathBuf,
    generations: Option<u64>,
    config_path: PathBuf,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config, then apply CLI overrides
    let mut config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        Config::default()
    };

    if let Some(g) = generations {
        config.run.generations = g;
    }
    if let Some(dir) = output {
        config.output.dir = dir;
    }
    config.validate()?;

    // Parse the seed; any malformed line aborts before simulation
    let seed = Seed::from_file(&seed_path)?;
    println!(
        "Seed: {}x{} grid, {} live cells",
        seed.width,
        seed.height,
        seed.cells.len()
    );
    println!("Generations: {}", config.run.generations);

    let mut world = World::from_seed(&seed);

    let writer = SnapshotWriter::new(config.output.dir.clone(), config.output.live_marker)?;
    let mut history = StatsHistory::new();

    // Generation 0: the committed seed
    writer.write_initial(&world.snapshot())?;
    history.record(world.stats.clone());
    if !quiet {
        println!("{}", world.stats.summary());
    }

    let start = Instant::now();

    for _ in 0..config.run.generations {
        world.step();

        writer.write_generation(&world.snapshot(), world.generation)?;
        history.record(world.stats.clone());

        if !quiet {
            println!("{}", world.stats.summary());
        }
    }

    if world.is_extinct() {
        println!("World extinct at generation {}", world.generation);
    }

    let elapsed = start.elapsed();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    println!("Generations: {}", world.generation);
    println!("Final live cells: {}", world.live_count());

    // Save stats history
    let stats_path = config.output.dir.join("stats_history.json");
    history.save(&stats_path)?;
    println!("Stats history: {:?}", stats_path);

    Ok(())
}

fn run_benchmark(
    width: usize,
    height: usize,
    generations: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== lifesim Benchmark ===");
    println!("Grid: {}x{}", width, height);
    println!("Generations: {}", generations);
    println!();

    let result = benchmark(width, height, generations);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
