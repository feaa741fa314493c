use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::warn;

use backend_application::commands::toothbrush_commands;
use backend_application::dtos::{CreateToothbrushRequest, StatusResponse};
use backend_application::AppState;

use crate::error::HttpError;

pub async fn create_toothbrush_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateToothbrushRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, HttpError> {
    let Json(request) = payload.map_err(|err| {
        warn!("rejected toothbrush payload: {}", err.body_text());
        HttpError::BadRequest(err.body_text())
    })?;
    toothbrush_commands::create_toothbrush_event(&state, request).await?;
    Ok(Json(StatusResponse::new("success")))
}
