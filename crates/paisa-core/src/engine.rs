//! Derivation engine facade
//!
//! Bundles the three pure computations with their collaborators: inputs are
//! read through a [`RecordStore`], and advice strings come from an optional
//! [`AdviceClient`]. Advice failure is always caught here and replaced with
//! a neutral default; it never fails the underlying computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisor::{
    AdviceBackend, AdviceClient, DEFAULT_FORECAST_EXPLANATION, DEFAULT_SCORE_ADVICE,
};
use crate::error::Result;
use crate::forecast::{predict, Jitter, Trend};
use crate::models::IncomePoint;
use crate::roundup::{round_up, RoundUpResult};
use crate::score::{compute_credit_score, ScoreBreakdown, ScoreInputs};
use crate::store::RecordStore;

/// Credit score response shape: composite, breakdown, and advisory text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScoreReport {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub advice: String,
}

/// Income prediction response shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub historical: Vec<IncomePoint>,
    pub forecast: Vec<IncomePoint>,
    pub trend: Trend,
    pub explanation: String,
}

/// The financial derivation engine
#[derive(Default)]
pub struct DerivationEngine {
    advisor: Option<AdviceClient>,
}

impl DerivationEngine {
    /// Create an engine without an advice collaborator; reports carry the
    /// neutral default strings.
    pub fn new() -> Self {
        Self { advisor: None }
    }

    /// Create an engine that asks `advisor` for advice text
    pub fn with_advisor(advisor: AdviceClient) -> Self {
        Self {
            advisor: Some(advisor),
        }
    }

    /// Compute the round-up for a single amount
    pub fn round_up(&self, amount: Decimal) -> Result<RoundUpResult> {
        let round_up_amount = round_up(amount)?;
        debug!(amount = %amount, round_up = %round_up_amount, "Round-up computed");
        Ok(RoundUpResult { round_up_amount })
    }

    /// Compute the composite credit score from the store's records
    pub async fn credit_score(&self, store: &dyn RecordStore) -> Result<CreditScoreReport> {
        let inputs = ScoreInputs::gather(store);
        let result = compute_credit_score(&inputs);

        debug!(
            score = result.score,
            savings = result.breakdown.savings,
            roundup = result.breakdown.roundup,
            stability = result.breakdown.stability,
            community = result.breakdown.community,
            "Credit score computed"
        );

        let advice = match &self.advisor {
            Some(client) => match client
                .score_advice(&result, inputs.total_savings, inputs.round_up_usage_percent)
                .await
            {
                Ok(advice) => advice,
                Err(e) => {
                    warn!(error = %e, "Advice service unavailable, using default advice");
                    DEFAULT_SCORE_ADVICE.to_string()
                }
            },
            None => DEFAULT_SCORE_ADVICE.to_string(),
        };

        Ok(CreditScoreReport {
            score: result.score,
            breakdown: result.breakdown,
            advice,
        })
    }

    /// Project the income series from the store's records.
    ///
    /// `since` bounds the historical window (pass None for all income
    /// observations).
    pub async fn income_prediction(
        &self,
        store: &dyn RecordStore,
        since: Option<NaiveDate>,
        periods: u32,
        jitter: &mut dyn Jitter,
    ) -> Result<PredictionReport> {
        let historical = store.income_series(since)?;
        let result = predict(historical, periods, jitter);

        debug!(
            historical = result.historical.len(),
            forecast = result.forecast.len(),
            trend = %result.trend,
            "Income prediction computed"
        );

        let explanation = match &self.advisor {
            Some(client) => match client
                .forecast_explanation(&result.historical, &result.forecast, result.trend)
                .await
            {
                Ok(explanation) => explanation,
                Err(e) => {
                    warn!(error = %e, "Advice service unavailable, using default explanation");
                    DEFAULT_FORECAST_EXPLANATION.to_string()
                }
            },
            None => DEFAULT_FORECAST_EXPLANATION.to_string(),
        };

        Ok(PredictionReport {
            historical: result.historical,
            forecast: result.forecast,
            trend: result.trend,
            explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::NoJitter;
    use crate::models::{ContributionStatus, TransactionType};
    use crate::store::MemoryStore;
    use rust_decimal_macros::dec;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        for (i, amount) in [1000, 1020, 980, 1010].into_iter().enumerate() {
            store
                .record_transaction(
                    date(1, 1 + 7 * i as u32),
                    "Weekly payout",
                    Decimal::from(amount),
                    TransactionType::Income,
                )
                .unwrap();
        }
        store
            .record_transaction(date(1, 10), "Fuel", dec!(203), TransactionType::Expense)
            .unwrap();
        store.add_contribution(ContributionStatus::Published);
        store
    }

    #[test]
    fn test_engine_round_up() {
        let engine = DerivationEngine::new();
        assert_eq!(
            engine.round_up(dec!(199.5)).unwrap().round_up_amount,
            dec!(0.5)
        );
        assert!(engine.round_up(dec!(-3)).is_err());
    }

    #[tokio::test]
    async fn test_credit_score_without_advisor_uses_default() {
        let store = seeded_store();
        let engine = DerivationEngine::new();

        let report = engine.credit_score(&store).await.unwrap();
        assert_eq!(report.advice, DEFAULT_SCORE_ADVICE);
        // one of five transactions has a round-up -> 20% usage -> score 40
        assert_eq!(report.breakdown.roundup, 40);
        // steady weekly income -> low variation -> stability 100
        assert_eq!(report.breakdown.stability, 100);
        assert_eq!(report.breakdown.community, 20);
    }

    #[tokio::test]
    async fn test_credit_score_with_failing_advisor_degrades() {
        let store = seeded_store();
        let engine =
            DerivationEngine::with_advisor(AdviceClient::Mock(crate::advisor::MockAdvisor::unhealthy()));

        let report = engine.credit_score(&store).await.unwrap();
        assert_eq!(report.advice, DEFAULT_SCORE_ADVICE);
    }

    #[tokio::test]
    async fn test_credit_score_with_mock_advisor() {
        let store = seeded_store();
        let engine = DerivationEngine::with_advisor(AdviceClient::mock());

        let report = engine.credit_score(&store).await.unwrap();
        assert!(report.advice.contains(&report.score.to_string()));
    }

    #[tokio::test]
    async fn test_income_prediction_flow() {
        let store = seeded_store();
        let engine = DerivationEngine::new();

        let report = engine
            .income_prediction(&store, None, 12, &mut NoJitter)
            .await
            .unwrap();
        assert_eq!(report.historical.len(), 4);
        assert_eq!(report.forecast.len(), 12);
        assert_eq!(report.trend, Trend::Stable);
        assert_eq!(report.explanation, DEFAULT_FORECAST_EXPLANATION);
    }

    #[tokio::test]
    async fn test_income_prediction_insufficient_history() {
        let mut store = MemoryStore::new();
        store
            .record_transaction(date(1, 3), "Payout", dec!(1000), TransactionType::Income)
            .unwrap();
        store
            .record_transaction(date(1, 10), "Payout", dec!(1500), TransactionType::Income)
            .unwrap();

        let engine = DerivationEngine::new();
        let report = engine
            .income_prediction(&store, None, 12, &mut NoJitter)
            .await
            .unwrap();

        assert!(report.forecast.is_empty());
        assert_eq!(report.trend, Trend::Increasing);
    }

    #[tokio::test]
    async fn test_income_prediction_since_cutoff() {
        let store = seeded_store();
        let engine = DerivationEngine::new();

        let report = engine
            .income_prediction(&store, Some(date(1, 5)), 12, &mut NoJitter)
            .await
            .unwrap();
        // only the last three income points fall after the cutoff
        assert_eq!(report.historical.len(), 3);
        assert!(report.forecast.is_empty());
    }
}
