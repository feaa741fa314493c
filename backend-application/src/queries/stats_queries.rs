use chrono::Utc;
use tracing::error;

use backend_domain::{compute_stats, StatsSnapshot};

use crate::AppState;

/// Stats over the full history. When the store cannot be read the default
/// snapshot is returned instead of an error.
pub async fn get_stats(state: &AppState) -> StatsSnapshot {
    match load_stats(state).await {
        Ok(stats) => stats,
        Err(err) => {
            state.metrics.record_store_error();
            error!("stats computation failed, serving defaults: {}", err);
            StatsSnapshot::default()
        }
    }
}

async fn load_stats(state: &AppState) -> anyhow::Result<StatsSnapshot> {
    let events = state.event_repo.list_events().await?;
    let toothbrush = state.toothbrush_repo.list_toothbrush_events().await?;
    Ok(compute_stats(&events, &toothbrush, Utc::now()))
}
