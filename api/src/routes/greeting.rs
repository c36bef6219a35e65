use crate::dto::GreetingResponse;
use axum::Json;

/// GET /
/// Response: 200 OK with `{"message": "...", "timestamp": "<ISO-8601>"}`
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse::now())
}
