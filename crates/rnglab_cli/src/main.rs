//! RngLab CLI - Interactive Pseudo-Random Generator Laboratory
//!
//! This is the operational entry point for the rnglab generator library.
//!
//! # Commands
//!
//! - `rnglab` / `rnglab interactive` - Menu-driven sampling session
//! - `rnglab sample --generator <name> --count <n> --intervals <N>` - One-shot report
//! - `rnglab list` - List the available generators
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate owns console I/O, configuration and
//! logging, and delegates every computation to `rnglab_core`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rnglab_core::{GeneratorKind, Laboratory, MAX_SAMPLE_COUNT};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::LabConfig;
pub use error::{CliError, Result};

/// Pseudo-random generator laboratory
#[derive(Parser)]
#[command(name = "rnglab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "rnglab.toml")]
    config: PathBuf,

    /// Fixed seed (overrides the configuration and the wall clock)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive generator menu (default)
    Interactive,

    /// Draw samples from one generator and print the report
    Sample {
        /// Generator name or menu ordinal (e.g. polar, 7)
        #[arg(short, long)]
        generator: GeneratorKind,

        /// Number of values to generate (at most 10,000,000)
        #[arg(short = 'n', long, default_value_t = 100, value_parser = parse_count)]
        count: usize,

        /// Number of histogram intervals
        #[arg(short = 'N', long, default_value_t = 10)]
        intervals: usize,

        /// Histogram lower bound (defaults to the generator's range)
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        /// Histogram upper bound (defaults to the generator's range)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,

        /// Omit the list of generated values
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the available generators
    List,
}

fn parse_count(value: &str) -> std::result::Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|e| format!("'{}' is not a valid count: {}", value, e))?;
    if count > MAX_SAMPLE_COUNT {
        return Err(format!("count must not exceed {}", MAX_SAMPLE_COUNT));
    }
    Ok(count)
}

fn init_tracing(verbose: bool, log_level: &str) -> Result<()> {
    let default_level = if verbose { "debug" } else { log_level };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| CliError::logging(e.to_string()))?,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

fn build_laboratory(config: &LabConfig) -> Result<Laboratory> {
    let lab = match config.seed {
        Some(seed) => Laboratory::new(&config.generators, seed)?,
        None => Laboratory::from_wall_clock(&config.generators)?,
    };
    info!(seed = lab.seed(), "Laboratory seeded; pass --seed {} to replay", lab.seed());
    Ok(lab)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LabConfig::load_with_env_and_validate(&cli.config)?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_tracing(cli.verbose, &config.log_level)?;
    info!(config = %cli.config.display(), "rnglab starting");

    match cli.command {
        None | Some(Commands::Interactive) => {
            let mut lab = build_laboratory(&config)?;
            commands::interactive::run(&mut lab, &config)
        }
        Some(Commands::Sample {
            generator,
            count,
            intervals,
            min,
            max,
            quiet,
        }) => {
            let mut lab = build_laboratory(&config)?;
            let request = commands::sample::SampleRequest {
                generator,
                count,
                intervals,
                min,
                max,
                quiet,
            };
            commands::sample::run(&mut lab, &config, &request)
        }
        Some(Commands::List) => commands::list::run(&config),
    }
}
