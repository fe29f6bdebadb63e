use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use worker_mail_api::app::create_app;
use worker_mail_api::state::SharedAppState;
use worker_mail_api::utils::{init_environment_bindings, load_mail_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("worker_mail_api=info,tower_http=info")),
    )
    .init();

  let mail_config = load_mail_config();
  let bindings = init_environment_bindings(&mail_config.binding)?;
  tracing::info!("Registered bindings: {:?}", bindings);

  let app_state = SharedAppState::new(bindings, mail_config);
  let app = create_app(app_state);

  let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
  let listener = tokio::net::TcpListener::bind(&addr).await?;

  tracing::info!("Server running on http://{}", addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => tracing::error!("Failed to install signal handler: {}", e),
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
