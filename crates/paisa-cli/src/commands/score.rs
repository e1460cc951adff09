//! `paisa score` - composite credit score over the loaded records

use std::path::Path;

use paisa_core::{AdviceClient, ContributionStatus, DerivationEngine};

use super::load_store;

pub async fn cmd_score(file: &Path, contributions: u32) -> anyhow::Result<()> {
    let mut store = load_store(file)?;
    for _ in 0..contributions {
        store.add_contribution(ContributionStatus::Published);
    }

    let engine = match AdviceClient::from_env() {
        Some(advisor) => DerivationEngine::with_advisor(advisor),
        None => DerivationEngine::new(),
    };

    let report = engine.credit_score(&store).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
