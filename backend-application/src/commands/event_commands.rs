use chrono::{DateTime, Utc};
use tracing::{debug, error};

use backend_domain::{parse_timestamp, EventCategory, LocationCategory, NewEvent};

use crate::dtos::CreateEventRequest;
use crate::{AppError, AppState};

pub async fn create_event(state: &AppState, request: CreateEventRequest) -> Result<(), AppError> {
    let event = build_new_event(request, Utc::now())?;
    if let Err(err) = state.event_repo.insert_event(&event).await {
        state.metrics.record_store_error();
        error!("failed to insert event: {}", err);
        return Err(AppError::Internal(err));
    }
    state.metrics.record_event_created();
    Ok(())
}

/// Deleting an id that does not exist is not an error; the return value
/// tells whether a row was removed.
pub async fn delete_event(state: &AppState, id: i64) -> Result<bool, AppError> {
    let removed = state.event_repo.delete_event(id).await.map_err(|err| {
        state.metrics.record_store_error();
        error!("failed to delete event {}: {}", id, err);
        AppError::Internal(err)
    })?;
    if removed {
        state.metrics.record_event_deleted();
    } else {
        debug!("delete requested for missing event {}", id);
    }
    Ok(removed)
}

fn build_new_event(request: CreateEventRequest, now: DateTime<Utc>) -> Result<NewEvent, AppError> {
    let event_type = request
        .event_type
        .parse::<EventCategory>()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let location = request
        .location
        .parse::<LocationCategory>()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    Ok(NewEvent {
        event_type,
        location,
        who: normalize_optional_text(request.who),
        timestamp: parse_timestamp(request.timestamp.as_deref(), now),
    })
}

pub(crate) fn normalize_optional_text(value: Option<String>) -> Option<String> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
