use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    MethodNotAllowed,
}

/// Convert our errors to `{"error": ...}` JSON responses
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("Rejecting request: {:?}", self);
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
