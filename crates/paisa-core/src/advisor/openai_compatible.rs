//! OpenAI-compatible advice backend
//!
//! Works with any server that implements the OpenAI chat completions API:
//! hosted OpenAI, vLLM, LocalAI, llama-server, and similar.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::forecast::Trend;
use crate::models::IncomePoint;
use crate::score::CreditScoreResult;

use super::AdviceBackend;

const SCORE_SYSTEM_PROMPT: &str = "You are a helpful financial advisor providing specific, \
    actionable advice to improve credit scores.";

const FORECAST_SYSTEM_PROMPT: &str = "You are a helpful financial advisor providing clear, \
    encouraging insights about income trends.";

/// Advice backend speaking the OpenAI `/v1/chat/completions` API
#[derive(Clone)]
pub struct OpenAICompatibleAdvisor {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAICompatibleAdvisor {
    /// Create a new backend without an API key
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: None,
        }
    }

    /// Create with an API key
    pub fn with_api_key(base_url: &str, model: &str, api_key: &str) -> Self {
        let mut advisor = Self::new(base_url, model);
        advisor.api_key = Some(api_key.to_string());
        advisor
    }

    /// Create from environment variables
    ///
    /// Required: `ADVICE_HOST`
    /// Optional: `ADVICE_MODEL` (default: gpt-3.5-turbo), `ADVICE_API_KEY`
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("ADVICE_HOST").ok()?;
        let model =
            std::env::var("ADVICE_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let api_key = std::env::var("ADVICE_API_KEY").ok();

        let mut advisor = Self::new(&host, &model);
        advisor.api_key = api_key;
        Some(advisor)
    }

    async fn chat_completion(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens,
            temperature: 0.7,
        };

        let mut req_builder = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&request);

        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req_builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Advice(format!(
                "Advice API error {}: {}",
                status, body
            )));
        }

        let chat_response: ChatCompletionResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Advice("No response from advice API".into()))
    }
}

/// Request to the chat completions API
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl AdviceBackend for OpenAICompatibleAdvisor {
    async fn score_advice(
        &self,
        result: &CreditScoreResult,
        total_savings: Decimal,
        round_up_percent: f64,
    ) -> Result<String> {
        let prompt = format!(
            "Based on the following credit score analysis, provide personalized financial advice:\n\n\
             Credit Score: {}/100\n\
             Breakdown:\n\
             - Savings Score: {}/100 (Current Balance: {})\n\
             - Round-up Consistency: {}/100 ({:.1}% of transactions)\n\
             - Income Stability: {}/100\n\
             - Community Engagement: {}/100\n\n\
             Please provide 2-3 actionable recommendations to improve the credit score. \
             Be specific and encouraging.",
            result.score,
            result.breakdown.savings,
            total_savings,
            result.breakdown.roundup,
            round_up_percent,
            result.breakdown.stability,
            result.breakdown.community,
        );

        debug!(score = result.score, "Requesting score advice");
        self.chat_completion(SCORE_SYSTEM_PROMPT, &prompt, 200).await
    }

    async fn forecast_explanation(
        &self,
        historical: &[IncomePoint],
        forecast: &[IncomePoint],
        trend: Trend,
    ) -> Result<String> {
        let summarize = |points: &[IncomePoint]| {
            points
                .iter()
                .map(|p| format!("{}: {:.2}", p.date, p.amount))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let recent = &historical[historical.len().saturating_sub(8)..];
        let upcoming = &forecast[..forecast.len().min(4)];

        let prompt = format!(
            "Based on the following income data, provide a brief, friendly explanation of the \
             income trend and forecast:\n\n\
             Historical Income (last 8 periods): {}\n\
             Forecast (next 4 periods): {}\n\
             Trend: {}\n\n\
             Please provide a 2-3 sentence explanation that's easy to understand and encouraging. \
             Focus on the trend and what it means for the user's financial future.",
            summarize(recent),
            summarize(upcoming),
            trend,
        );

        debug!(trend = %trend, "Requesting forecast explanation");
        self.chat_completion(FORECAST_SYSTEM_PROMPT, &prompt, 150).await
    }

    async fn health_check(&self) -> bool {
        let mut req_builder = self
            .http_client
            .get(format!("{}/v1/models", self.base_url));

        if let Some(ref api_key) = self.api_key {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", api_key));
        }

        match req_builder.send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}
