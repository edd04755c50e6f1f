// core/src/seed.rs

//! Fixed sample data loaded into a fresh store at startup.

use crate::models::{NewProduct, Price};

/// Products every seeded store starts with, in id order (ids 1, 2, 3).
pub fn sample_products() -> Vec<NewProduct> {
  vec![
    NewProduct::new("Widget", Price::from_cents(999)),
    NewProduct::new("Gadget", Price::from_cents(2450)),
    NewProduct::new("Doohickey", Price::from_cents(475)),
  ]
}
