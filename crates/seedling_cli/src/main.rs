//! seedling CLI - reproducible seeded draws from the command line
//!
//! # Commands
//!
//! - `seedling int --low 10 --high 20` - inclusive integer draws
//! - `seedling float` - uniform draws in [0, 1)
//! - `seedling gauss --mean 0 --stddev 1` - Gaussian draws
//! - `seedling shuffle a b c` - one shuffled permutation
//! - `seedling freq --low 1 --high 6` - integer draws tabulated by value
//! - `seedling walkthrough` - the seeding demonstration end to end
//!
//! Results go to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedling_cli::commands;
use seedling_cli::config::{build_config, CliArgs};
use seedling_cli::output::render;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reproducible pseudo-random draws
#[derive(Parser)]
#[command(name = "seedling")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for reproducible output (default: OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Number of draws
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw integers uniformly from an inclusive range
    Int {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        low: i64,

        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        high: i64,
    },

    /// Draw floats uniformly from [0, 1)
    Float,

    /// Draw normally distributed samples
    Gauss {
        /// Mean of the distribution
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        mean: f64,

        /// Standard deviation of the distribution
        #[arg(long, default_value = "1.0")]
        stddev: f64,
    },

    /// Shuffle the given items
    Shuffle {
        /// Items to shuffle
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Draw integers and tabulate how often each value occurs
    Freq {
        /// Lower bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        low: i64,

        /// Upper bound (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        high: i64,
    },

    /// Run the seeding demonstration
    Walkthrough,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            seed: self.seed,
            log_level: self.log_level.clone(),
            format: self.format.clone(),
            count: self.count,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args()).context("failed to resolve configuration")?;

    init_tracing(config.log_level.as_filter_str());

    info!("seedling v{}", seedling_cli::VERSION);
    info!(
        seed = ?config.seed,
        format = %config.format,
        count = config.count,
        "configuration loaded"
    );

    let reports = match &cli.command {
        Commands::Int { low, high } => commands::draw::int(&config, *low, *high),
        Commands::Float => commands::draw::float(&config),
        Commands::Gauss { mean, stddev } => commands::draw::gauss(&config, *mean, *stddev),
        Commands::Shuffle { items } => commands::shuffle::run(&config, items),
        Commands::Freq { low, high } => commands::freq::run(&config, *low, *high),
        Commands::Walkthrough => commands::walkthrough::run(&config),
    }?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&reports, config.format, &mut out).context("failed to write output")?;

    Ok(())
}
