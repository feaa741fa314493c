use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::warn;

use backend_application::commands::event_commands;
use backend_application::dtos::{CreateEventRequest, StatusResponse};
use backend_application::AppState;

use crate::error::HttpError;

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, HttpError> {
    let Json(request) = payload.map_err(|err| {
        warn!("rejected event payload: {}", err.body_text());
        HttpError::BadRequest(err.body_text())
    })?;
    event_commands::create_event(&state, request).await?;
    Ok(Json(StatusResponse::new("success")))
}

pub async fn delete_event(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StatusResponse>, HttpError> {
    let Path(id) = id.map_err(|err| HttpError::BadRequest(err.body_text()))?;
    event_commands::delete_event(&state, id).await?;
    Ok(Json(StatusResponse::new("deleted")))
}
