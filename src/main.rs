use std::sync::Arc;

use dotenvy::dotenv;
use tokio::signal;

use yzen_contact_api::app::create_app;
use yzen_contact_api::email::{Mailer, SmtpConfig, SmtpMailer};
use yzen_contact_api::state::{AppConfig, SharedAppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = AppConfig::from_env();
  let mailer = Arc::new(SmtpMailer::new(SmtpConfig::from_env())?);

  // Startup connectivity check. Failure is logged and the server keeps
  // accepting requests; individual sends will report their own errors.
  let verifier = Arc::clone(&mailer);
  tokio::spawn(async move {
    match verifier.verify().await {
      Ok(()) => tracing::info!("Servidor SMTP listo para enviar emails"),
      Err(error) => tracing::error!("Error al conectar con el servidor SMTP: {:#}", error),
    }
  });

  let port = config.port;
  let app_state = SharedAppState::new(mailer, config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

  println!("Servidor corriendo en http://localhost:{}", port);

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
