use crate::email::types::{ContactEmail, SmtpConfig};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use lettre::{
  message::{Attachment, Mailbox, MultiPart, SinglePart},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Every submission is relayed to this inbox.
pub const RECIPIENT: &str = "yzensoftware@gmail.com";

/// Transport seam between the HTTP handlers and the SMTP client. The
/// handlers only ever see this trait, so tests can substitute a recorder.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, email: &ContactEmail) -> Result<()>;
  async fn verify(&self) -> Result<()>;
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }

  fn build_message(&self, email: &ContactEmail) -> Result<Message> {
    let from = Mailbox::new(Some(email.from_name.clone()), self.smtp_config.username.parse()?);

    let builder = Message::builder()
      .from(from)
      .to(RECIPIENT.parse()?)
      .reply_to(email.reply_to.parse()?)
      .subject(&email.subject);

    let message = match &email.attachment {
      Some(image) => {
        let content_type = image
          .content_type
          .parse()
          .map_err(|e| anyhow!("invalid content type {}: {}", image.content_type, e))?;
        let attachment = Attachment::new(image.filename.clone()).body(image.content.clone(), content_type);

        builder.multipart(
          MultiPart::mixed()
            .singlepart(SinglePart::html(email.html_body.clone()))
            .singlepart(attachment),
        )?
      }
      None => builder.singlepart(SinglePart::html(email.html_body.clone()))?,
    };

    Ok(message)
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, email: &ContactEmail) -> Result<()> {
    let message = self.build_message(email)?;
    self.transporter.send(message).await?;
    Ok(())
  }

  async fn verify(&self) -> Result<()> {
    if self.transporter.test_connection().await? {
      Ok(())
    } else {
      Err(anyhow!("el servidor SMTP rechazó la conexión"))
    }
  }
}
