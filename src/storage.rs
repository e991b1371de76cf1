use crate::error::EngineError;
use crate::model::Round;
use crate::wager::{SettlementConfig, settle};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StoreError {}

/// The round/score aggregator seam. The surrounding app owns persistence;
/// the engine only needs to pull a round snapshot and push settled
/// winnings back, one `(player_id, winnings_cents)` row per player.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn load_round(&self, round_id: i64) -> Result<Round, StoreError>;
    async fn store_winnings(
        &self,
        round_id: i64,
        winnings: &[(i64, i64)],
    ) -> Result<(), StoreError>;
}

/// Load a round, settle it, persist the winnings, and hand the settled
/// round back. Callers settling the same round concurrently must
/// serialize per round id; the engine itself holds no locks.
///
/// # Errors
/// Returns an error if the load or the winnings write fails.
pub async fn settle_and_store(
    store: &dyn RoundStore,
    round_id: i64,
    config: &SettlementConfig,
) -> Result<Round, EngineError> {
    let mut round = store.load_round(round_id).await?;
    settle(&mut round, config);
    let winnings: Vec<(i64, i64)> = round
        .players
        .iter()
        .map(|p| (p.player_id, p.winnings_cents))
        .collect();
    store.store_winnings(round_id, &winnings).await?;
    Ok(round)
}
