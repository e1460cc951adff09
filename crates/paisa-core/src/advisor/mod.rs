//! Pluggable advice backend abstraction
//!
//! The engine's advice strings come from an external text-generation
//! service. This module keeps that collaborator behind a trait so the
//! engine can run against an OpenAI-compatible server or a mock, and so
//! an unavailable service degrades to a neutral default instead of
//! failing the computation.
//!
//! # Configuration
//!
//! Environment variables:
//! - `ADVICE_BACKEND`: Backend to use (openai, mock). Default: openai
//! - `ADVICE_HOST`: Server URL (required for the openai backend)
//! - `ADVICE_MODEL`: Model name (default: gpt-3.5-turbo)
//! - `ADVICE_API_KEY`: API key if required (optional)

mod mock;
mod openai_compatible;

pub use mock::MockAdvisor;
pub use openai_compatible::OpenAICompatibleAdvisor;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::forecast::Trend;
use crate::models::IncomePoint;
use crate::score::CreditScoreResult;

/// Neutral advice used when the text-generation service is unavailable
pub const DEFAULT_SCORE_ADVICE: &str =
    "Focus on building consistent savings habits and maintaining stable income.";

/// Neutral explanation used when the text-generation service is unavailable
pub const DEFAULT_FORECAST_EXPLANATION: &str = "Income trend analysis completed.";

/// Trait defining the interface for advice backends
#[async_trait]
pub trait AdviceBackend: Send + Sync {
    /// Generate actionable advice for a computed credit score
    async fn score_advice(
        &self,
        result: &CreditScoreResult,
        total_savings: Decimal,
        round_up_percent: f64,
    ) -> Result<String>;

    /// Generate a short explanation of an income trend and forecast
    async fn forecast_explanation(
        &self,
        historical: &[IncomePoint],
        forecast: &[IncomePoint],
        trend: Trend,
    ) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete advice client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AdviceClient {
    /// OpenAI-compatible backend (chat completions API)
    OpenAICompatible(OpenAICompatibleAdvisor),
    /// Mock backend for testing
    Mock(MockAdvisor),
}

impl AdviceClient {
    /// Create an advice client from environment variables
    ///
    /// Returns None if the required variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("ADVICE_BACKEND").unwrap_or_else(|_| "openai".to_string());

        match backend.to_lowercase().as_str() {
            "openai" | "openai_compatible" => {
                OpenAICompatibleAdvisor::from_env().map(AdviceClient::OpenAICompatible)
            }
            "mock" => Some(AdviceClient::Mock(MockAdvisor::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown ADVICE_BACKEND, falling back to openai");
                OpenAICompatibleAdvisor::from_env().map(AdviceClient::OpenAICompatible)
            }
        }
    }

    /// Create an OpenAI-compatible client directly
    pub fn openai(host: &str, model: &str) -> Self {
        AdviceClient::OpenAICompatible(OpenAICompatibleAdvisor::new(host, model))
    }

    /// Create a mock client for testing
    pub fn mock() -> Self {
        AdviceClient::Mock(MockAdvisor::new())
    }
}

#[async_trait]
impl AdviceBackend for AdviceClient {
    async fn score_advice(
        &self,
        result: &CreditScoreResult,
        total_savings: Decimal,
        round_up_percent: f64,
    ) -> Result<String> {
        match self {
            AdviceClient::OpenAICompatible(b) => {
                b.score_advice(result, total_savings, round_up_percent).await
            }
            AdviceClient::Mock(b) => b.score_advice(result, total_savings, round_up_percent).await,
        }
    }

    async fn forecast_explanation(
        &self,
        historical: &[IncomePoint],
        forecast: &[IncomePoint],
        trend: Trend,
    ) -> Result<String> {
        match self {
            AdviceClient::OpenAICompatible(b) => {
                b.forecast_explanation(historical, forecast, trend).await
            }
            AdviceClient::Mock(b) => b.forecast_explanation(historical, forecast, trend).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AdviceClient::OpenAICompatible(b) => b.health_check().await,
            AdviceClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AdviceClient::OpenAICompatible(b) => b.model(),
            AdviceClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AdviceClient::OpenAICompatible(b) => b.host(),
            AdviceClient::Mock(b) => b.host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_client_mock() {
        let client = AdviceClient::mock();
        assert_eq!(client.model(), "mock");
        assert_eq!(client.host(), "mock://localhost");
    }

    #[tokio::test]
    async fn test_mock_health_check() {
        let client = AdviceClient::mock();
        assert!(client.health_check().await);
    }
}
