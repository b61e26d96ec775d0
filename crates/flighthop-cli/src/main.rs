use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flighthop_cli::commands;
use flighthop_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Country flight network utilities")]
struct Cli {
    /// Override the flight data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two countries.
    Route {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
    },
    /// Find a route taking an exact number of flights.
    Exact {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
        /// Required number of flights.
        #[arg(long)]
        length: usize,
    },
    /// Pick a random challenge pair to fly between.
    Challenge {
        /// Minimum number of flights between the picked countries.
        #[arg(long, default_value_t = 2)]
        min_length: usize,
        /// Seed for deterministic selection.
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the optimal route.
        #[arg(long)]
        reveal: bool,
    },
    /// Sample qualifying pairs within a length range.
    Sample {
        /// Minimum number of flights between the sampled countries.
        #[arg(long, default_value_t = 2)]
        min_length: usize,
        /// Maximum number of flights between the sampled countries.
        #[arg(long, default_value_t = 5)]
        max_length: usize,
        /// Number of pairs to sample.
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// Seed for deterministic selection.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the countries reachable with a single flight.
    Neighbours {
        /// Country name.
        country: String,
    },
    /// Show summary statistics for the network.
    Stats {
        /// Number of entries in the degree tables.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();
    let format = cli.format;

    match cli.command {
        Command::Route { from, to } => commands::route::handle_route(data_dir, format, &from, &to),
        Command::Exact { from, to, length } => {
            commands::exact::handle_exact(data_dir, format, &from, &to, length)
        }
        Command::Challenge {
            min_length,
            seed,
            reveal,
        } => commands::challenge::handle_challenge(data_dir, format, min_length, seed, reveal),
        Command::Sample {
            min_length,
            max_length,
            count,
            seed,
        } => commands::sample::handle_sample(data_dir, format, min_length, max_length, count, seed),
        Command::Neighbours { country } => {
            commands::neighbours::handle_neighbours(data_dir, format, &country)
        }
        Command::Stats { top } => commands::stats::handle_stats(data_dir, format, top),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
