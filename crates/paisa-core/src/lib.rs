//! Paisa Core Library
//!
//! Shared functionality for the Paisa round-up savings engine:
//! - Round-up calculator (spare change to the next multiple of 5)
//! - Credit score aggregator (bucketed sub-scores, weighted composite)
//! - Income forecaster (trend classification, weekly projection)
//! - Record store abstraction with an in-memory implementation
//! - CSV transaction loading
//! - Pluggable advice backends (OpenAI-compatible, mock)

pub mod advisor;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod import;
pub mod models;
pub mod roundup;
pub mod score;
pub mod store;

pub use advisor::{
    AdviceBackend, AdviceClient, MockAdvisor, OpenAICompatibleAdvisor, DEFAULT_FORECAST_EXPLANATION,
    DEFAULT_SCORE_ADVICE,
};
pub use engine::{CreditScoreReport, DerivationEngine, PredictionReport};
pub use error::{Error, Result};
pub use forecast::{
    classify_trend, generate_forecast, predict, Jitter, NoJitter, PredictionResult, RandomJitter,
    Trend, DEFAULT_PERIODS, MIN_HISTORY,
};
pub use import::{load_csv, parse_csv};
pub use models::{
    ContributionStatus, GoalStatus, IncomePoint, SavingsGoal, Transaction, TransactionType,
};
pub use roundup::{round_up, round_up_with_denomination, RoundUpResult, DEFAULT_DENOMINATION};
pub use score::{
    compute_credit_score, income_variation, round_up_usage_percent, CreditScoreResult,
    ScoreBreakdown, ScoreInputs,
};
pub use store::{MemoryStore, RecordStore, DEFAULT_GOAL_NAME, DEFAULT_GOAL_TARGET};
