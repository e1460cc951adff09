//! Error types for Paisa

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(rust_decimal::Decimal),

    #[error("Invalid denomination: {0} (must be positive)")]
    InvalidDenomination(rust_decimal::Decimal),

    #[error("Advice service error: {0}")]
    Advice(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Import error: {0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, Error>;
