//! Command-line front end for the answer-space searches.

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use answer_search::rotated::{search_min_distinct, search_min_with_duplicates};
use answer_search::{nth_root_or_sentinel, RootStrategy};

#[derive(Parser)]
#[command(name = "answer-search")]
#[command(about = "Binary search over answer spaces", long_about = None)]
struct Cli {
    /// Log search steps (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum of a rotated ascending sequence
    Min {
        /// Allow repeated values
        #[arg(short, long)]
        duplicates: bool,

        /// The rotated sequence
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Exact integer n-th root, or -1 if there is none
    Root {
        /// Root degree
        #[arg(short = 'n', long, default_value = "2")]
        degree: NonZeroU32,

        /// Search strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Bisection)]
        strategy: StrategyArg,

        /// Radicand
        #[arg(allow_negative_numbers = true)]
        radicand: i64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    BruteForce,
    Bisection,
}

impl From<StrategyArg> for RootStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BruteForce => Self::BruteForce,
            StrategyArg::Bisection => Self::Bisection,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Min { duplicates, values } => {
            let found = if duplicates {
                search_min_with_duplicates(&values)
            } else {
                search_min_distinct(&values)
            }
            .context("Minimum search failed")?;

            info!(
                halvings = found.stats.halvings,
                linear_shrinks = found.stats.linear_shrinks,
                "search finished"
            );
            println!("findMin : {}", found.minimum);
            if !duplicates {
                println!("rotation offset : {}", found.index);
            }
        }
        Commands::Root {
            degree,
            strategy,
            radicand,
        } => {
            let strategy = RootStrategy::from(strategy);
            info!(degree = degree.get(), radicand, %strategy, "searching for root");
            println!("nthRoot : {}", nth_root_or_sentinel(degree, radicand, strategy));
        }
    }

    Ok(())
}
