//! Mock advice backend for testing
//!
//! Returns deterministic strings so tests can assert on advice content
//! without a running text-generation server.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::forecast::Trend;
use crate::models::IncomePoint;
use crate::score::CreditScoreResult;

use super::AdviceBackend;

/// Mock advice backend
#[derive(Clone)]
pub struct MockAdvisor {
    /// Whether health_check should return true
    pub healthy: bool,
}

impl Default for MockAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdvisor {
    /// Create a new mock advisor (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create a mock advisor whose calls fail, for degradation tests
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl AdviceBackend for MockAdvisor {
    async fn score_advice(
        &self,
        result: &CreditScoreResult,
        _total_savings: Decimal,
        _round_up_percent: f64,
    ) -> Result<String> {
        if !self.healthy {
            return Err(Error::Advice("mock advisor is unavailable".into()));
        }
        Ok(format!(
            "Your score is {}/100. Keep applying round-ups and grow your savings balance.",
            result.score
        ))
    }

    async fn forecast_explanation(
        &self,
        _historical: &[IncomePoint],
        forecast: &[IncomePoint],
        trend: Trend,
    ) -> Result<String> {
        if !self.healthy {
            return Err(Error::Advice("mock advisor is unavailable".into()));
        }
        Ok(format!(
            "Your income looks {} over the next {} periods.",
            trend,
            forecast.len()
        ))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
