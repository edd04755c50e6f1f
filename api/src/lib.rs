// api/src/lib.rs

//! HTTP layer of the shopping cart service: configuration, error mapping,
//! shared state and the actix-web route table over `shopping_cart_core`.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
pub use crate::web::create_app;
