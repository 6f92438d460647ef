//! Wayfinder Command Line Interface
//!
//! Finds shortest routes across ASCII grid maps.

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{inspect, load_finder, route};
use crate::error::Result;

/// Wayfinder Command Line Interface
///
/// Routes across ASCII maps with A* over a Fibonacci heap.
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML file with map characters and move costs
    #[arg(short, long, env = "WAYFINDER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Log search details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Marked map or pretty-printed table
    Text,
    /// JSON format
    Json,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route from start to end and draw it on the map
    Route {
        /// Path to the map file, or `-` for stdin
        map: PathBuf,
    },

    /// Show map statistics
    Inspect {
        /// Path to the map file, or `-` for stdin
        map: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let finder = load_finder(cli.config.as_deref())?;
    match cli.command {
        Commands::Route { map } => route::run(&finder, &map, cli.format),
        Commands::Inspect { map } => inspect::run(&finder, &map, cli.format),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "wayfinder=debug" } else { "wayfinder=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
