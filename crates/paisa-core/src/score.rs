//! Score Aggregator
//!
//! Turns raw savings/transaction/community aggregates into four bucketed
//! sub-scores and a weighted composite credit score in [0, 100]. Each
//! bucketing function maps its input onto {0, 20, 40, 60, 80, 100} via a
//! descending threshold table; the highest threshold met wins.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Transaction;
use crate::store::RecordStore;

/// Composite weights per sub-score. Must sum to 1.0 exactly; changing them
/// requires re-deriving the [0, 100] clamp bounds.
pub const SAVINGS_WEIGHT: f64 = 0.40;
pub const ROUNDUP_WEIGHT: f64 = 0.25;
pub const STABILITY_WEIGHT: f64 = 0.20;
pub const COMMUNITY_WEIGHT: f64 = 0.15;

/// The four sub-scores behind a composite credit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub savings: u8,
    pub roundup: u8,
    pub stability: u8,
    pub community: u8,
}

/// Composite credit score plus its breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScoreResult {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Raw aggregates feeding the score computation
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInputs {
    /// Sum of active savings goal balances
    pub total_savings: Decimal,
    /// % of transactions with a round-up applied, in [0, 100]
    pub round_up_usage_percent: f64,
    /// Coefficient of variation of income amounts (lower = more stable)
    pub income_variation: f64,
    /// Count of published community contributions
    pub community_contributions: u32,
}

impl ScoreInputs {
    /// Gather score inputs from a record store.
    ///
    /// Missing data degrades the affected dimensions to zero-valued inputs
    /// instead of failing the whole computation.
    pub fn gather(store: &dyn RecordStore) -> Self {
        let total_savings = match store.active_savings_balance() {
            Ok(balance) => balance,
            Err(e) => {
                warn!(error = %e, "Failed to fetch savings balance, degrading savings score");
                Decimal::ZERO
            }
        };

        let (round_up_usage_percent, income_variation) = match store.transactions() {
            Ok(transactions) => {
                let usage = round_up_usage_percent(&transactions);
                let incomes: Vec<f64> = transactions
                    .iter()
                    .filter(|t| t.is_income())
                    .filter_map(|t| t.amount.to_f64())
                    .collect();
                (usage, income_variation(&incomes))
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch transactions, degrading roundup/stability scores");
                (0.0, 0.0)
            }
        };

        let community_contributions = match store.published_contribution_count() {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Failed to fetch contributions, degrading community score");
                0
            }
        };

        Self {
            total_savings,
            round_up_usage_percent,
            income_variation,
            community_contributions,
        }
    }
}

/// Sub-score for total savings balance
pub fn savings_score(balance: Decimal) -> u8 {
    if balance >= dec!(50000) {
        100
    } else if balance >= dec!(25000) {
        80
    } else if balance >= dec!(10000) {
        60
    } else if balance >= dec!(5000) {
        40
    } else if balance >= dec!(1000) {
        20
    } else {
        0
    }
}

/// Sub-score for round-up usage consistency (percentage of transactions)
pub fn round_up_score(usage_percent: f64) -> u8 {
    if usage_percent >= 80.0 {
        100
    } else if usage_percent >= 60.0 {
        80
    } else if usage_percent >= 40.0 {
        60
    } else if usage_percent >= 20.0 {
        40
    } else if usage_percent >= 10.0 {
        20
    } else {
        0
    }
}

/// Sub-score for income stability; lower variation scores higher
pub fn stability_score(income_variation: f64) -> u8 {
    if income_variation <= 0.1 {
        100
    } else if income_variation <= 0.2 {
        80
    } else if income_variation <= 0.3 {
        60
    } else if income_variation <= 0.4 {
        40
    } else if income_variation <= 0.5 {
        20
    } else {
        0
    }
}

/// Sub-score for published community contributions
pub fn community_score(contributions: u32) -> u8 {
    if contributions >= 10 {
        100
    } else if contributions >= 7 {
        80
    } else if contributions >= 5 {
        60
    } else if contributions >= 3 {
        40
    } else if contributions >= 1 {
        20
    } else {
        0
    }
}

/// Percentage of transactions with a round-up applied, in [0, 100].
/// An empty slice yields 0.
pub fn round_up_usage_percent(transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    let applied = transactions.iter().filter(|t| t.round_up_applied).count();
    applied as f64 / transactions.len() as f64 * 100.0
}

/// Coefficient of variation of a series of income amounts:
/// `stddev / mean`, or 0 with fewer than 2 observations or a non-positive mean.
pub fn income_variation(amounts: &[f64]) -> f64 {
    if amounts.len() < 2 {
        return 0.0;
    }

    let mean = amounts.iter().sum::<f64>() / amounts.len() as f64;
    if mean <= 0.0 {
        return 0.0;
    }

    let variance =
        amounts.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / amounts.len() as f64;
    variance.sqrt() / mean
}

/// Compute the composite credit score from raw aggregates
pub fn compute_credit_score(inputs: &ScoreInputs) -> CreditScoreResult {
    let breakdown = ScoreBreakdown {
        savings: savings_score(inputs.total_savings),
        roundup: round_up_score(inputs.round_up_usage_percent),
        stability: stability_score(inputs.income_variation),
        community: community_score(inputs.community_contributions),
    };

    let weighted = f64::from(breakdown.savings) * SAVINGS_WEIGHT
        + f64::from(breakdown.roundup) * ROUNDUP_WEIGHT
        + f64::from(breakdown.stability) * STABILITY_WEIGHT
        + f64::from(breakdown.community) * COMMUNITY_WEIGHT;

    let score = weighted.round().clamp(0.0, 100.0) as u8;

    CreditScoreResult { score, breakdown }
}
