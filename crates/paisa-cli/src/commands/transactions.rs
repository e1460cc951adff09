//! `paisa transactions` - tabular listing of the loaded records

use std::path::Path;

use paisa_core::RecordStore;

use super::load_store;

pub fn cmd_transactions(file: &Path) -> anyhow::Result<()> {
    let store = load_store(file)?;
    let transactions = store.transactions()?;

    if transactions.is_empty() {
        println!("No transactions in {}", file.display());
        return Ok(());
    }

    println!(
        "{:<12} {:<30} {:>12} {:<12} {:>10}",
        "Date", "Description", "Amount", "Type", "Round-up"
    );
    for tx in &transactions {
        let round_up = if tx.round_up_applied {
            tx.round_up_amount.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<12} {:<30} {:>12} {:<12} {:>10}",
            tx.date.to_string(),
            truncate(&tx.description, 30),
            tx.amount.to_string(),
            tx.tx_type.to_string(),
            round_up
        );
    }

    println!(
        "\n{} transactions, {} saved via round-ups",
        transactions.len(),
        store.active_savings_balance()?
    );
    Ok(())
}

/// Truncate a string to `max` characters, appending an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
