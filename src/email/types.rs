use std::env;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl SmtpConfig {
  /// Reads the SMTP settings from the environment. Missing credentials do not
  /// stop the process; they surface later as send-time failures.
  pub fn from_env() -> Self {
    SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse()
        .unwrap_or(587),
      username: env::var("SMTP_USER").unwrap_or_default(),
      password: env::var("SMTP_PASS").unwrap_or_default(),
    }
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

/// A single decoded image attachment for an outgoing contact email.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
  pub filename: String,
  pub content_type: String,
  pub content: Vec<u8>,
}

/// The fully composed contact email, ready to hand to the transport.
/// The From address is always the authenticated SMTP user; the submitter's
/// name becomes the display name and their address goes into Reply-To.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEmail {
  pub from_name: String,
  pub reply_to: String,
  pub subject: String,
  pub html_body: String,
  pub attachment: Option<ImageAttachment>,
}
