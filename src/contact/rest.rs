use axum::{extract::State, response::Json as JsonResponse, Json};
use chrono::{SecondsFormat, Utc};

use super::model::{DebugResponse, HealthResponse, SendEmailRequest, SendEmailResponse};
use super::service::build_email;
use crate::error::ApiError;
use crate::state::SharedAppState;

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendEmailRequest>,
) -> Result<JsonResponse<SendEmailResponse>, ApiError> {
  if !payload.has_required_fields() {
    return Err(ApiError::bad_request("Los campos nombre, email y mensaje son obligatorios"));
  }

  let email = build_email(&payload).map_err(send_failure)?;
  state.mailer.send(&email).await.map_err(send_failure)?;

  Ok(JsonResponse(SendEmailResponse {
    success: true,
    message: "Email enviado correctamente".to_string(),
  }))
}

fn send_failure(error: anyhow::Error) -> ApiError {
  tracing::error!("Error al enviar email: {:#}", error);
  ApiError::internal_server_error("Error al enviar el email", format!("{:#}", error))
}

pub async fn health_handler() -> JsonResponse<HealthResponse> {
  JsonResponse(HealthResponse {
    success: true,
    message: "API funcionando correctamente".to_string(),
    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
  })
}

/// Always answers 200; a failing SMTP check is reported in the body so the
/// endpoint stays usable for diagnosing exactly that failure.
pub async fn debug_handler(State(state): State<SharedAppState>) -> JsonResponse<DebugResponse> {
  let smtp_status = match state.mailer.verify().await {
    Ok(()) => "Conexión exitosa".to_string(),
    Err(error) => format!("Error: {:#}", error),
  };

  JsonResponse(DebugResponse {
    success: true,
    config: state.config.redacted(),
    smtp_status,
    node_env: state.config.node_env(),
  })
}
