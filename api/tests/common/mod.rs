// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use actix_web::web;
use once_cell::sync::Lazy;
use shopping_cart_api::{AppConfig, AppState};
use shopping_cart_core::{InMemoryStore, ShopRepository};
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Fresh seeded store per test, so tests never see each other's writes.
pub fn seeded_state() -> web::Data<AppState> {
  setup_tracing();
  let repository: Arc<dyn ShopRepository> = Arc::new(InMemoryStore::seeded());
  web::Data::new(AppState::new(repository, Arc::new(AppConfig::default())))
}

// Seeded ids (see `shopping_cart_core::seed::sample_products`)
pub const WIDGET_ID: i32 = 1;
pub const GADGET_ID: i32 = 2;
