//! Paisa CLI - Round-up savings derivation engine
//!
//! Usage:
//!   paisa roundup 199.50              Compute spare change for an amount
//!   paisa score --file tx.csv         Composite credit score
//!   paisa forecast --periods 12       Weekly income projection
//!   paisa transactions                List loaded records

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

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
        Commands::Roundup { amount } => commands::cmd_roundup(amount),
        Commands::Score { contributions } => commands::cmd_score(&cli.file, contributions).await,
        Commands::Forecast {
            periods,
            seed,
            window_days,
        } => commands::cmd_forecast(&cli.file, periods, seed, window_days).await,
        Commands::Transactions => commands::cmd_transactions(&cli.file),
    }
}
