use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::dtos::StatusResponse;
use backend_application::AppState;

use crate::error::HttpError;

#[derive(Serialize)]
struct StoreProbe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse::new("backend running"))
}

pub async fn test_db(State(state): State<AppState>) -> impl IntoResponse {
    match ping_store(&state).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StoreProbe {
                status: "connected",
                error: None,
            }),
        ),
        Err(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StoreProbe {
                status: "error",
                error: Some(message),
            }),
        ),
    }
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready(State(state): State<AppState>) -> StatusCode {
    match ping_store(&state).await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render_prometheus();
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
}

pub async fn not_found() -> HttpError {
    HttpError::NotFound
}

async fn ping_store(state: &AppState) -> Result<(), String> {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    match timeout(Duration::from_secs(timeout_secs), state.event_repo.ping()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => {
            error!("store ping failed: {:#}", err);
            state.metrics.record_store_error();
            Err(format!("{:#}", err))
        }
        Err(_) => {
            error!("store ping timeout after {}s", timeout_secs);
            state.metrics.record_store_error();
            Err(format!("store ping timed out after {}s", timeout_secs))
        }
    }
}
