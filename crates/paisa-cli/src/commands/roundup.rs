//! `paisa roundup` - compute spare change for a single amount

use paisa_core::DerivationEngine;
use rust_decimal::Decimal;

pub fn cmd_roundup(amount: Decimal) -> anyhow::Result<()> {
    let engine = DerivationEngine::new();
    let result = engine.round_up(amount)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
