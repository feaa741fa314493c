use tracing::error;

use crate::dtos::DataSnapshot;
use crate::AppState;

/// Lists everything, newest first. A failed read yields empty lists so the
/// dashboard can still render.
pub async fn list_data(state: &AppState) -> DataSnapshot {
    let events = match state.event_repo.list_events().await {
        Ok(events) => events,
        Err(err) => {
            state.metrics.record_store_error();
            error!("failed to list events: {}", err);
            Vec::new()
        }
    };
    let toothbrush = match state.toothbrush_repo.list_toothbrush_events().await {
        Ok(events) => events,
        Err(err) => {
            state.metrics.record_store_error();
            error!("failed to list toothbrush events: {}", err);
            Vec::new()
        }
    };
    DataSnapshot { events, toothbrush }
}
