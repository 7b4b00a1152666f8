use axum::{
  extract::DefaultBodyLimit,
  routing::{get, post},
  Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
  contact::rest::{debug_handler, health_handler, send_email_handler},
  state::SharedAppState,
};

/// Submissions can embed a base64 image, so the default axum body limit is
/// far too small.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/api/send-email", post(send_email_handler))
    .route("/api/health", get(health_handler))
    .route("/api/debug", get(debug_handler))
    .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .with_state(state)
}
