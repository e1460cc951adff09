//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::commands::{self, load_store};
use paisa_core::RecordStore;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE: &str = "date,description,amount,type\n\
    2026-01-05,Delivery payout,1000,income\n\
    2026-01-07,Fuel,203,expense\n\
    2026-01-12,Delivery payout,1050,income\n";

// ========== Store Loading Tests ==========

#[test]
fn test_load_store_applies_round_ups() {
    let file = write_csv(SAMPLE);
    let store = load_store(file.path()).unwrap();

    let transactions = store.transactions().unwrap();
    assert_eq!(transactions.len(), 3);

    let expense = transactions.iter().find(|t| t.is_expense()).unwrap();
    assert!(expense.round_up_applied);
}

#[test]
fn test_load_store_missing_file() {
    let result = load_store(std::path::Path::new("/nonexistent/tx.csv"));
    assert!(result.is_err());
}

#[test]
fn test_load_store_malformed_csv() {
    let file = write_csv("date,description,amount,type\nnot-a-date,Fuel,203,expense\n");
    assert!(load_store(file.path()).is_err());
}

// ========== Command Tests ==========

#[test]
fn test_cmd_transactions() {
    let file = write_csv(SAMPLE);
    assert!(commands::cmd_transactions(file.path()).is_ok());
}

#[test]
fn test_cmd_transactions_empty_file() {
    let file = write_csv("date,description,amount,type\n");
    assert!(commands::cmd_transactions(file.path()).is_ok());
}

#[tokio::test]
async fn test_cmd_score() {
    let file = write_csv(SAMPLE);
    assert!(commands::cmd_score(file.path(), 2).await.is_ok());
}

#[tokio::test]
async fn test_cmd_forecast() {
    let file = write_csv(SAMPLE);
    // short history: still succeeds with an empty forecast
    assert!(commands::cmd_forecast(file.path(), 12, Some(42), 3650)
        .await
        .is_ok());
}
