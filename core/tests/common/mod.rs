// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use shopping_cart_core::{InMemoryStore, NewProduct, Price};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
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

// --- Store builders ---
pub fn seeded_store() -> InMemoryStore {
  setup_tracing();
  InMemoryStore::seeded()
}

pub fn empty_store() -> InMemoryStore {
  setup_tracing();
  InMemoryStore::new()
}

pub fn new_product(name: &str, cents: i64) -> NewProduct {
  NewProduct::new(name, Price::from_cents(cents))
}

// Seeded ids (see `seed::sample_products`)
pub const WIDGET_ID: i32 = 1;
pub const GADGET_ID: i32 = 2;
pub const DOOHICKEY_ID: i32 = 3;
