//! Command implementations for the Paisa CLI

mod forecast;
mod roundup;
mod score;
mod transactions;

pub use forecast::cmd_forecast;
pub use roundup::cmd_roundup;
pub use score::cmd_score;
pub use transactions::cmd_transactions;

use std::path::Path;

use anyhow::Context;
use paisa_core::{load_csv, MemoryStore};

/// Load the transaction file into a store, replaying each record so
/// expenses pick up their round-ups and the default goal accrues.
pub fn load_store(file: &Path) -> anyhow::Result<MemoryStore> {
    let parsed = load_csv(file)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))?;

    let mut store = MemoryStore::new();
    for tx in parsed {
        store
            .record_transaction(tx.date, tx.description, tx.amount, tx.tx_type)
            .context("Failed to record transaction")?;
    }
    Ok(store)
}
