//! Email sending functionality module
//!
//! This module provides the SMTP side of the contact relay using lettre,
//! a popular email library for Rust.

mod service;
mod types;

pub use service::{Mailer, RECIPIENT, SmtpMailer};
pub use types::{ContactEmail, ImageAttachment, SmtpConfig};
