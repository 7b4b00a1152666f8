use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

/// Error shape for the JSON API: every failure body carries
/// `success: false` plus a human-readable message, and send failures
/// additionally expose the transport error text under `error`.
#[derive(Debug)]
pub struct ApiError {
  pub status_code: StatusCode,
  pub message: String,
  pub detail: Option<String>,
}

impl ApiError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      detail: None,
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>, detail: impl Into<String>) -> Self {
    Self {
      status_code: StatusCode::INTERNAL_SERVER_ERROR,
      message: message.into(),
      detail: Some(detail.into()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let mut body = json!({
      "success": false,
      "message": self.message,
    });
    if let Some(detail) = self.detail {
      body["error"] = json!(detail);
    }

    (self.status_code, Json(body)).into_response()
  }
}
