//! CSV transaction loading
//!
//! Expected format, with a header row:
//!
//! ```csv
//! date,description,amount,type
//! 2026-02-03,Delivery payout,1250.00,income
//! 2026-02-04,Fuel,203,expense
//! ```

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Parse transactions from CSV data, returning them sorted by date
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // header occupies line 1
        let line = i + 2;
        transactions.push(parse_record(&record, line)?);
    }

    transactions.sort_by_key(|t| t.date);
    debug!(count = transactions.len(), "Parsed transaction CSV");
    Ok(transactions)
}

/// Load transactions from a CSV file on disk
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}

fn parse_record(record: &StringRecord, line: usize) -> Result<Transaction> {
    let field = |idx: usize, name: &str| -> Result<&str> {
        record
            .get(idx)
            .ok_or_else(|| Error::Import(format!("line {}: missing {} column", line, name)))
    };

    let date = NaiveDate::parse_from_str(field(0, "date")?, "%Y-%m-%d")
        .map_err(|e| Error::Import(format!("line {}: invalid date: {}", line, e)))?;
    let description = field(1, "description")?.to_string();
    let amount = Decimal::from_str_exact(field(2, "amount")?)
        .map_err(|e| Error::Import(format!("line {}: invalid amount: {}", line, e)))?;
    let tx_type: TransactionType = field(3, "type")?
        .parse()
        .map_err(|e| Error::Import(format!("line {}: {}", line, e)))?;

    if amount <= Decimal::ZERO {
        return Err(Error::Import(format!(
            "line {}: amount must be positive, got {}",
            line, amount
        )));
    }

    Ok(Transaction::new(date, description, amount, tx_type))
}
