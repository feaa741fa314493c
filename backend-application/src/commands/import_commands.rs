use chrono::Utc;
use tracing::{error, info};

use backend_domain::{normalize_event_rows, normalize_toothbrush_rows, ImportRow};

use crate::{AppError, AppState};

/// Normalizes every row and writes the resulting events. Returns the number
/// of rows processed; malformed cells never reject a row.
pub async fn import_events(state: &AppState, rows: Vec<ImportRow>) -> Result<usize, AppError> {
    let events = normalize_event_rows(&rows, Utc::now());
    if !events.is_empty() {
        state.event_repo.insert_events(&events).await.map_err(|err| {
            state.metrics.record_store_error();
            error!("event import failed after normalizing {} rows: {}", events.len(), err);
            AppError::Internal(err)
        })?;
    }
    state.metrics.record_import(events.len());
    info!(rows = events.len(), "imported events");
    Ok(events.len())
}

pub async fn import_toothbrush_events(
    state: &AppState,
    rows: Vec<ImportRow>,
) -> Result<usize, AppError> {
    let events = normalize_toothbrush_rows(&rows, Utc::now());
    if !events.is_empty() {
        state
            .toothbrush_repo
            .insert_toothbrush_events(&events)
            .await
            .map_err(|err| {
                state.metrics.record_store_error();
                error!(
                    "toothbrush import failed after normalizing {} rows: {}",
                    events.len(),
                    err
                );
                AppError::Internal(err)
            })?;
    }
    state.metrics.record_import(events.len());
    info!(rows = events.len(), "imported toothbrush events");
    Ok(events.len())
}
