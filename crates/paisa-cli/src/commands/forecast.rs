//! `paisa forecast` - weekly income projection over the loaded records

use std::path::Path;

use chrono::{Duration, Local};
use paisa_core::{AdviceClient, DerivationEngine, Jitter, RandomJitter};

use super::load_store;

pub async fn cmd_forecast(
    file: &Path,
    periods: u32,
    seed: Option<u64>,
    window_days: i64,
) -> anyhow::Result<()> {
    let store = load_store(file)?;

    let engine = match AdviceClient::from_env() {
        Some(advisor) => DerivationEngine::with_advisor(advisor),
        None => DerivationEngine::new(),
    };

    let mut jitter: Box<dyn Jitter> = match seed {
        Some(seed) => Box::new(RandomJitter::from_seed(seed)),
        None => Box::new(RandomJitter::from_entropy()),
    };

    let since = Local::now().date_naive() - Duration::days(window_days);
    let report = engine
        .income_prediction(&store, Some(since), periods, jitter.as_mut())
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
