//! OpMetrics CLI
//!
//! Builds per-operation metrics databases from raw records and rolls them
//! up into coarse-grained profiles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use opmetrics::commands::{
    display_version, execute_derive, execute_ingest, execute_inspect, execute_merge,
    validate_args, DeriveArgs, IngestArgs, InspectArgs, MergeArgs,
};
use opmetrics::utils::config::DEFAULT_TOP_OPS;

/// OpMetrics - per-operation performance metrics aggregation
#[derive(Parser, Debug)]
#[command(name = "opmetrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a fine-grained profile from raw records
    Ingest {
        /// JSON array of raw records
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the profile
        #[arg(short, long, default_value = "fine.json")]
        output: PathBuf,

        /// Measurement window in picoseconds
        #[arg(long, env = "OPMETRICS_TOTAL_TIME_PS", default_value = "0")]
        total_time_ps: u64,

        /// Append an IDLE record for unattributed time
        #[arg(long)]
        add_idle: bool,
    },

    /// Roll a fine-grained profile up into named operations
    Derive {
        /// Fine-grained profile
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the coarse-grained profile
        #[arg(short, long, default_value = "coarse.json")]
        output: PathBuf,
    },

    /// Merge independently built shard profiles
    Merge {
        /// Shard profiles (repeat for each shard)
        #[arg(short, long = "input", required = true)]
        inputs: Vec<PathBuf>,

        /// Output path for the merged profile
        #[arg(short, long, default_value = "merged.json")]
        output: PathBuf,
    },

    /// Print a profile summary and its top operations
    Inspect {
        /// Profile to inspect
        #[arg(short, long)]
        input: PathBuf,

        /// Number of top operations to show
        #[arg(long, default_value_t = DEFAULT_TOP_OPS)]
        top: usize,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Ingest {
            input,
            output,
            total_time_ps,
            add_idle,
        } => {
            let args = IngestArgs {
                input,
                output,
                total_time_ps,
                add_idle,
            };
            validate_args(&args)?;
            execute_ingest(&args)?;
        }

        Commands::Derive { input, output } => {
            let args = DeriveArgs { input, output };
            validate_args(&args)?;
            execute_derive(&args)?;
        }

        Commands::Merge { inputs, output } => {
            let args = MergeArgs { inputs, output };
            validate_args(&args)?;
            execute_merge(&args)?;
        }

        Commands::Inspect { input, top } => {
            let args = InspectArgs { input, top };
            validate_args(&args)?;
            execute_inspect(&args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
