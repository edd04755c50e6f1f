// api/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use shopping_cart_api::telemetry::{self, LogFormat};
use shopping_cart_api::{create_app, AppConfig, AppState};
use shopping_cart_core::{InMemoryStore, ShopRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Load application configuration. A bad value still gets logged through
  // tracing, using the default format since the configured one is unknown.
  let app_config = match AppConfig::from_env() {
    Ok(config) => Arc::new(config),
    Err(e) => {
      telemetry::init_tracing(LogFormat::default());
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(anyhow::Error::new(e).context("Failed to load application configuration"));
    }
  };

  // Initialize tracing subscriber for logging
  telemetry::init_tracing(app_config.log_format);
  tracing::info!(
    log_format = %app_config.log_format,
    seed_db = app_config.seed_db,
    "Starting shopping cart API server..."
  );

  // The store lives for the whole process; nothing is persisted across restarts.
  let repository: Arc<dyn ShopRepository> = if app_config.seed_db {
    Arc::new(InMemoryStore::seeded())
  } else {
    tracing::info!("Seeding disabled, starting with an empty store.");
    Arc::new(InMemoryStore::new())
  };

  let app_state = actix_data::Data::new(AppState::new(repository, app_config.clone()));

  // Configure and Start Actix Web Server
  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let mut server = HttpServer::new(move || create_app(app_state.clone()));
  if let Some(workers) = app_config.workers {
    server = server.workers(workers);
  }

  server
    .bind(&server_address)
    .with_context(|| format!("Failed to bind {}", server_address))?
    .run()
    .await
    .context("Server terminated with an error")?;

  tracing::info!("Server shut down.");
  Ok(())
}
