use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, error};

use backend_application::commands::import_commands;
use backend_application::dtos::ImportResponse;
use backend_application::AppState;
use backend_domain::ImportRow;

use crate::error::HttpError;
use crate::middleware::{parse_upload, read_upload};

pub async fn import_events(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImportResponse>, HttpError> {
    let rows = decode_upload(multipart).await?;
    let imported = import_commands::import_events(&state, rows).await?;
    Ok(Json(ImportResponse::imported(imported)))
}

pub async fn import_toothbrush_events(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImportResponse>, HttpError> {
    let rows = decode_upload(multipart).await?;
    let imported = import_commands::import_toothbrush_events(&state, rows).await?;
    Ok(Json(ImportResponse::imported(imported)))
}

async fn decode_upload(multipart: Multipart) -> Result<Vec<ImportRow>, HttpError> {
    let upload = read_upload(multipart).await.map_err(|err| {
        error!("failed to read import upload: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;
    debug!(
        "received upload {:?} ({:?}, {} bytes)",
        upload.file_name,
        upload.content_type,
        upload.bytes.len()
    );
    parse_upload(&upload).map_err(|err| {
        error!("failed to parse import upload: {}", err);
        HttpError::BadRequest(err.to_string())
    })
}
