use chrono::Utc;
use tracing::error;

use backend_domain::{parse_timestamp, NewToothbrushEvent};

use crate::dtos::CreateToothbrushRequest;
use crate::{AppError, AppState};

pub async fn create_toothbrush_event(
    state: &AppState,
    request: CreateToothbrushRequest,
) -> Result<(), AppError> {
    let event = NewToothbrushEvent {
        timestamp: parse_timestamp(request.timestamp.as_deref(), Utc::now()),
        used_irrigator: request.used_irrigator.unwrap_or(false),
    };
    if let Err(err) = state.toothbrush_repo.insert_toothbrush_event(&event).await {
        state.metrics.record_store_error();
        error!("failed to insert toothbrush event: {}", err);
        return Err(AppError::Internal(err));
    }
    state.metrics.record_toothbrush_created();
    Ok(())
}
