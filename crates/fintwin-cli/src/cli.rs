//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fintwin - Project your savings under base, optimistic, and conservative scenarios
#[derive(Parser)]
#[command(name = "fintwin")]
#[command(about = "Multi-year savings projection tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config file (TOML). Defaults to the platform config
    /// directory, then built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable). Empty = same-origin only.
        #[arg(long = "origin")]
        origins: Vec<String>,
    },

    /// Run a one-shot forecast and print the result
    Forecast {
        /// Monthly salary
        #[arg(short, long)]
        salary: f64,

        /// Monthly expense as name=amount (repeatable)
        #[arg(short, long = "expense")]
        expenses: Vec<String>,

        /// Projection length in months
        #[arg(long)]
        horizon: Option<usize>,

        /// Goal amount for the base scenario
        #[arg(long)]
        base_goal: Option<f64>,

        /// Goal amount for the optimistic scenario
        #[arg(long)]
        optimistic_goal: Option<f64>,

        /// Goal amount for the conservative scenario
        #[arg(long)]
        conservative_goal: Option<f64>,

        /// Seed for fluctuation noise (omit for a deterministic run)
        #[arg(long)]
        seed: Option<u64>,

        /// Noise amplitude per month (requires --seed)
        #[arg(long, requires = "seed")]
        noise_scale: Option<f64>,

        /// Print the full JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective engine configuration as TOML
    Config,
}
