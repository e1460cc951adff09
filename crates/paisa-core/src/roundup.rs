//! Round-Up Calculator
//!
//! Computes the spare change between a transaction amount and the next
//! multiple of the savings denomination. An amount that already sits on a
//! multiple rounds up to the *next* one: every transaction yields strictly
//! positive spare change.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The fixed savings denomination for this platform's currency
pub const DEFAULT_DENOMINATION: Decimal = dec!(5);

/// Result of a round-up computation, in the wire shape of the round-up endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundUpResult {
    #[serde(rename = "roundUpAmount")]
    pub round_up_amount: Decimal,
}

/// Compute the round-up for `amount` against the default denomination of 5
pub fn round_up(amount: Decimal) -> Result<Decimal> {
    round_up_with_denomination(amount, DEFAULT_DENOMINATION)
}

/// Compute the spare change needed to reach the next multiple of `denomination`.
///
/// Returns the full denomination when `amount` is already an exact multiple.
/// Rejects non-positive amounts; callers must filter them upstream.
pub fn round_up_with_denomination(amount: Decimal, denomination: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(amount));
    }
    if denomination <= Decimal::ZERO {
        return Err(Error::InvalidDenomination(denomination));
    }

    let nearest = (amount / denomination).ceil() * denomination;
    let delta = nearest - amount;

    if delta.is_zero() {
        Ok(denomination)
    } else {
        Ok(delta)
    }
}
