use serde::{Deserialize, Serialize};

/// Body of `POST /api/send-email`. Everything is optional at the serde level;
/// presence of the three required fields is checked by the handler so the
/// client gets the fixed 400 message instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendEmailRequest {
  pub name: Option<String>,
  pub company: Option<String>,
  pub email: Option<String>,
  pub message: Option<String>,
  pub image: Option<String>,
}

impl SendEmailRequest {
  pub fn has_required_fields(&self) -> bool {
    fn present(value: &Option<String>) -> bool {
      value.as_deref().is_some_and(|v| !v.is_empty())
    }

    present(&self.name) && present(&self.email) && present(&self.message)
  }
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
  pub success: bool,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub success: bool,
  pub message: String,
  pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DebugResponse {
  pub success: bool,
  pub config: SmtpDebugConfig,
  #[serde(rename = "smtpStatus")]
  pub smtp_status: String,
  #[serde(rename = "nodeEnv")]
  pub node_env: String,
}

/// Redacted snapshot of the SMTP environment for `GET /api/debug`. Field
/// names mirror the environment variables on the wire.
#[derive(Debug, Serialize)]
pub struct SmtpDebugConfig {
  #[serde(rename = "SMTP_HOST")]
  pub host: String,
  #[serde(rename = "SMTP_PORT")]
  pub port: String,
  #[serde(rename = "SMTP_SECURE")]
  pub secure: String,
  #[serde(rename = "SMTP_USER")]
  pub user: String,
  #[serde(rename = "SMTP_PASS")]
  pub pass: String,
}
