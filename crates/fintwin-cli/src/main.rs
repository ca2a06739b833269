//! Fintwin CLI - Savings projection tool
//!
//! Usage:
//!   fintwin forecast --salary 5000 --expense rent=1500 --expense food=500
//!   fintwin serve --port 8000 --origin http://localhost:3000
//!   fintwin config

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            origins,
        } => commands::cmd_serve(cli.config.as_deref(), &host, port, origins).await,
        Commands::Forecast {
            salary,
            expenses,
            horizon,
            base_goal,
            optimistic_goal,
            conservative_goal,
            seed,
            noise_scale,
            json,
        } => commands::cmd_forecast(
            cli.config.as_deref(),
            commands::ForecastArgs {
                salary,
                expenses,
                horizon,
                base_goal,
                optimistic_goal,
                conservative_goal,
                seed,
                noise_scale,
                json,
            },
        ),
        Commands::Config => commands::cmd_config(cli.config.as_deref()),
    }
}
