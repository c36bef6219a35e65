mod fallback;
mod greeting;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greeting::greeting))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
