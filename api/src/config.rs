// api/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use crate::telemetry::LogFormat;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  // Actix picks one worker per physical core when unset.
  pub workers: Option<usize>,

  // Seed sample products on startup
  pub seed_db: bool,

  pub log_format: LogFormat,

  // Target of the `GET /` redirect
  pub docs_path: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key lookup; `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_env("SERVER_HOST", "127.0.0.1");
    let server_port = get_env("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let workers = match lookup("SERVER_WORKERS") {
      Some(raw) => {
        let count = raw
          .parse::<usize>()
          .map_err(|e| AppError::Config(format!("Invalid SERVER_WORKERS: {}", e)))?;
        if count == 0 {
          return Err(AppError::Config("SERVER_WORKERS must be at least 1".to_string()));
        }
        Some(count)
      }
      None => None,
    };

    let seed_db = get_env("SEED_DB", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    let log_format = get_env("LOG_FORMAT", "pretty")
      .parse::<LogFormat>()
      .map_err(|e| AppError::Config(format!("Invalid LOG_FORMAT: {}", e)))?;

    let docs_path = get_env("DOCS_PATH", "/swagger");

    Ok(Self {
      server_host,
      server_port,
      workers,
      seed_db,
      log_format,
      docs_path,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      workers: None,
      seed_db: true,
      log_format: LogFormat::Pretty,
      docs_path: "/swagger".to_string(),
    }
  }
}
