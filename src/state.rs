use std::env;
use std::sync::Arc;

use crate::contact::model::SmtpDebugConfig;
use crate::email::Mailer;

/// Marker echoed by the debug endpoint for unset variables.
const UNSET: &str = "NO DEFINIDO";

/// Raw environment snapshot taken once at startup. Values are kept as the
/// process saw them so `/api/debug` can report exactly what was configured.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub smtp_host: Option<String>,
  pub smtp_port: Option<String>,
  pub smtp_secure: Option<String>,
  pub smtp_user: Option<String>,
  pub smtp_pass: Option<String>,
  pub node_env: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> Self {
    fn var(name: &str) -> Option<String> {
      env::var(name).ok().filter(|v| !v.is_empty())
    }

    AppConfig {
      port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
      smtp_host: var("SMTP_HOST"),
      smtp_port: var("SMTP_PORT"),
      smtp_secure: var("SMTP_SECURE"),
      smtp_user: var("SMTP_USER"),
      smtp_pass: var("SMTP_PASS"),
      node_env: var("NODE_ENV"),
    }
  }

  /// Snapshot for the debug endpoint: secrets masked, user truncated to a
  /// short prefix.
  pub fn redacted(&self) -> SmtpDebugConfig {
    SmtpDebugConfig {
      host: self.smtp_host.clone().unwrap_or_else(|| UNSET.to_string()),
      port: self.smtp_port.clone().unwrap_or_else(|| UNSET.to_string()),
      secure: self.smtp_secure.clone().unwrap_or_else(|| UNSET.to_string()),
      user: self
        .smtp_user
        .as_deref()
        .map(|u| format!("{}...", u.chars().take(5).collect::<String>()))
        .unwrap_or_else(|| UNSET.to_string()),
      pass: self
        .smtp_pass
        .as_deref()
        .map(|_| "****".to_string())
        .unwrap_or_else(|| UNSET.to_string()),
    }
  }

  pub fn node_env(&self) -> String {
    self.node_env.clone().unwrap_or_else(|| "development".to_string())
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      port: 3000,
      smtp_host: None,
      smtp_port: None,
      smtp_secure: None,
      smtp_user: None,
      smtp_pass: None,
      node_env: None,
    }
  }
}

#[derive(Clone)]
pub struct SharedAppState {
  pub mailer: Arc<dyn Mailer>,
  pub config: AppConfig,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>, config: AppConfig) -> Self {
    Self { mailer, config }
  }
}
