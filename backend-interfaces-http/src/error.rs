use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl From<backend_application::AppError> for HttpError {
    fn from(value: backend_application::AppError) -> Self {
        match value {
            backend_application::AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            backend_application::AppError::Internal(err) => HttpError::Internal(format!("{:#}", err)),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("bad request: {}", msg)),
            HttpError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use backend_application::AppError;

    use super::*;

    #[test]
    fn app_errors_map_to_status_codes() {
        let bad = HttpError::from(AppError::BadRequest("unknown location 'moon'".to_string()));
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let internal = HttpError::from(AppError::Internal(anyhow!("connection refused")));
        match &internal {
            HttpError::Internal(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("unexpected mapping: {:?}", other),
        }
        assert_eq!(internal.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(HttpError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
