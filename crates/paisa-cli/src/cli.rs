//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Paisa - Round-up savings and income insights for gig workers
#[derive(Parser)]
#[command(name = "paisa")]
#[command(about = "Round-up savings derivation engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction CSV file (date,description,amount,type)
    #[arg(long, default_value = "transactions.csv", global = true)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the round-up for a single amount
    Roundup {
        /// Transaction amount (must be positive)
        amount: Decimal,
    },

    /// Compute the composite credit score from the transaction file
    Score {
        /// Count of published community contributions to include
        #[arg(long, default_value = "0")]
        contributions: u32,
    },

    /// Project the income series from the transaction file
    Forecast {
        /// Number of weekly periods to project
        #[arg(short, long, default_value = "12")]
        periods: u32,

        /// Seed for the forecast jitter (omit for OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Only use income observed in the last N days
        #[arg(long, default_value = "90")]
        window_days: i64,
    },

    /// List the loaded transactions with their round-ups
    Transactions,
}
