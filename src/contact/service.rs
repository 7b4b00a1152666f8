use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use regex::Regex;

use crate::contact::model::SendEmailRequest;
use crate::email::{ContactEmail, ImageAttachment};

/// Outcome of interpreting the `image` field of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedImage {
  pub subtype: String,
  pub payload: String,
}

/// Splits an image string into media subtype and base64 payload. Accepts both
/// a `data:image/<subtype>;base64,<payload>` URI and bare base64; anything
/// that does not match the data-URI shape is treated as bare base64 with the
/// `png` default, matching the submission contract.
pub fn parse_image(raw: &str) -> ParsedImage {
  let pattern = Regex::new(r"data:image/(\w+);base64,(.+)").unwrap();

  if let Some(captures) = pattern.captures(raw) {
    ParsedImage {
      subtype: captures[1].to_string(),
      payload: captures[2].to_string(),
    }
  } else {
    ParsedImage {
      subtype: "png".to_string(),
      payload: raw.to_string(),
    }
  }
}

/// Composes the outgoing email from a validated submission. The caller has
/// already checked `has_required_fields`; a failure here means the image
/// payload could not be decoded and is reported as a send failure.
pub fn build_email(request: &SendEmailRequest) -> Result<ContactEmail> {
  let name = request.name.as_deref().unwrap_or_default();
  let email = request.email.as_deref().unwrap_or_default();
  let message = request.message.as_deref().unwrap_or_default();
  let company = request.company.as_deref().filter(|c| !c.is_empty());
  let image = request.image.as_deref().filter(|i| !i.is_empty());

  let mut subject = format!("Nueva propuesta de {}", name);
  if let Some(company) = company {
    subject.push_str(&format!(" - {}", company));
  }

  let attachment = match image {
    Some(raw) => {
      let parsed = parse_image(raw);
      let content = STANDARD
        .decode(parsed.payload.as_bytes())
        .context("la imagen no es base64 válido")?;

      Some(ImageAttachment {
        filename: format!("imagen.{}", parsed.subtype),
        content_type: format!("image/{}", parsed.subtype),
        content,
      })
    }
    None => None,
  };

  Ok(ContactEmail {
    from_name: name.to_string(),
    reply_to: email.to_string(),
    subject,
    html_body: build_html_body(name, company, email, message, attachment.is_some()),
    attachment,
  })
}

// Fields are interpolated without HTML escaping, as the contact form always
// did. The recipient is a fixed internal inbox; see DESIGN.md.
fn build_html_body(name: &str, company: Option<&str>, email: &str, message: &str, has_image: bool) -> String {
  let company_row = company
    .map(|c| format!("<p><strong>Compañía:</strong> {}</p>", c))
    .unwrap_or_default();
  let image_note = if has_image {
    r#"<p style="color: #666; font-style: italic;">Se adjunta una imagen.</p>"#
  } else {
    ""
  };

  format!(
    r#"<div style="font-family: Arial, sans-serif; padding: 20px; max-width: 600px;">
  <h2 style="color: #333; border-bottom: 2px solid #00d4ff; padding-bottom: 10px;">
    Nueva Propuesta Recibida
  </h2>

  <div style="margin: 20px 0;">
    <p><strong>Nombre:</strong> {name}</p>
    {company_row}
    <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
  </div>

  <div style="background-color: #f5f5f5; padding: 15px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #555; margin-top: 0;">Mensaje:</h3>
    <p style="color: #333; white-space: pre-wrap;">{message}</p>
  </div>

  {image_note}

  <hr style="border: none; border-top: 1px solid #ddd; margin: 20px 0;">
  <p style="color: #999; font-size: 12px;">
    Este mensaje fue enviado desde el formulario de contacto de YZEN Software.
  </p>
</div>"#
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request() -> SendEmailRequest {
    SendEmailRequest {
      name: Some("Ada".to_string()),
      company: None,
      email: Some("ada@example.com".to_string()),
      message: Some("Hola equipo".to_string()),
      image: None,
    }
  }

  #[test]
  fn parse_image_data_uri() {
    let parsed = parse_image("data:image/jpeg;base64,AAAA");
    assert_eq!(parsed.subtype, "jpeg");
    assert_eq!(parsed.payload, "AAAA");
  }

  #[test]
  fn parse_image_bare_base64_defaults_to_png() {
    let parsed = parse_image("AAAA");
    assert_eq!(parsed.subtype, "png");
    assert_eq!(parsed.payload, "AAAA");
  }

  #[test]
  fn parse_image_malformed_data_uri_falls_back() {
    // Prefix present but no subtype captured, whole string stays the payload.
    let parsed = parse_image("data:image/;base64,AAAA");
    assert_eq!(parsed.subtype, "png");
    assert_eq!(parsed.payload, "data:image/;base64,AAAA");
  }

  #[test]
  fn build_email_subject_without_company() {
    let email = build_email(&request()).expect("build email");
    assert_eq!(email.subject, "Nueva propuesta de Ada");
    assert!(!email.subject.contains(" - "));
  }

  #[test]
  fn build_email_subject_with_company() {
    let mut req = request();
    req.company = Some("ACME".to_string());

    let email = build_email(&req).expect("build email");
    assert_eq!(email.subject, "Nueva propuesta de Ada - ACME");
  }

  #[test]
  fn build_email_empty_company_is_ignored() {
    let mut req = request();
    req.company = Some("".to_string());

    let email = build_email(&req).expect("build email");
    assert_eq!(email.subject, "Nueva propuesta de Ada");
    assert!(!email.html_body.contains("Compañía"));
  }

  #[test]
  fn build_email_body_embeds_fields() {
    let mut req = request();
    req.company = Some("ACME".to_string());

    let email = build_email(&req).expect("build email");
    assert!(email.html_body.contains("<p><strong>Nombre:</strong> Ada</p>"));
    assert!(email.html_body.contains("<p><strong>Compañía:</strong> ACME</p>"));
    assert!(email.html_body.contains(r#"<a href="mailto:ada@example.com">ada@example.com</a>"#));
    assert!(email.html_body.contains("Hola equipo"));
    assert!(!email.html_body.contains("Se adjunta una imagen."));
  }

  #[test]
  fn build_email_fields_are_embedded_verbatim() {
    let mut req = request();
    req.name = Some("<b>Ada</b>".to_string());

    let email = build_email(&req).expect("build email");
    assert!(email.html_body.contains("<p><strong>Nombre:</strong> <b>Ada</b></p>"));
  }

  #[test]
  fn build_email_without_image_has_no_attachment() {
    let email = build_email(&request()).expect("build email");
    assert!(email.attachment.is_none());
  }

  #[test]
  fn build_email_data_uri_attachment() {
    let mut req = request();
    req.image = Some("data:image/jpeg;base64,AAAA".to_string());

    let email = build_email(&req).expect("build email");
    let attachment = email.attachment.expect("attachment present");
    assert_eq!(attachment.filename, "imagen.jpeg");
    assert_eq!(attachment.content_type, "image/jpeg");
    assert_eq!(attachment.content, vec![0, 0, 0]);
    assert!(email.html_body.contains("Se adjunta una imagen."));
  }

  #[test]
  fn build_email_bare_base64_attachment() {
    let mut req = request();
    req.image = Some("AAAA".to_string());

    let email = build_email(&req).expect("build email");
    let attachment = email.attachment.expect("attachment present");
    assert_eq!(attachment.filename, "imagen.png");
    assert_eq!(attachment.content_type, "image/png");
    assert_eq!(attachment.content, vec![0, 0, 0]);
  }

  #[test]
  fn build_email_empty_image_is_ignored() {
    let mut req = request();
    req.image = Some("".to_string());

    let email = build_email(&req).expect("build email");
    assert!(email.attachment.is_none());
    assert!(!email.html_body.contains("Se adjunta una imagen."));
  }

  #[test]
  fn build_email_invalid_base64_fails() {
    let mut req = request();
    req.image = Some("¡esto no es base64!".to_string());

    assert!(build_email(&req).is_err());
  }

  #[test]
  fn build_email_reply_to_is_submitter() {
    let email = build_email(&request()).expect("build email");
    assert_eq!(email.reply_to, "ada@example.com");
    assert_eq!(email.from_name, "Ada");
  }
}
