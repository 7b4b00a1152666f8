use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{ContactEmail, Mailer},
  state::{AppConfig, SharedAppState},
};

/// In-memory stand-in for the SMTP transport. Records every successfully
/// "sent" email and can be told to fail either operation.
#[derive(Default)]
pub struct RecordingMailer {
  pub sent: Mutex<Vec<ContactEmail>>,
  fail_send: Option<String>,
  fail_verify: Option<String>,
}

impl RecordingMailer {
  pub fn failing_send(reason: &str) -> Self {
    RecordingMailer {
      fail_send: Some(reason.to_string()),
      ..RecordingMailer::default()
    }
  }

  pub fn failing_verify(reason: &str) -> Self {
    RecordingMailer {
      fail_verify: Some(reason.to_string()),
      ..RecordingMailer::default()
    }
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, email: &ContactEmail) -> Result<()> {
    if let Some(reason) = &self.fail_send {
      return Err(anyhow!("{}", reason));
    }
    self.sent.lock().unwrap().push(email.clone());
    Ok(())
  }

  async fn verify(&self) -> Result<()> {
    if let Some(reason) = &self.fail_verify {
      return Err(anyhow!("{}", reason));
    }
    Ok(())
  }
}

pub fn app_with_mailer(mailer: Arc<RecordingMailer>) -> Router {
  create_app(SharedAppState::new(mailer, AppConfig::default()))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder().uri(uri).body(Body::empty()).expect("build request");
  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
