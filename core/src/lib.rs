// src/lib.rs

//! Shopping cart core: the data model and the repository layer behind the
//! shopping cart HTTP API.
//!
//! The crate provides:
//!  - `Product` and `CartItem` records, plus the `NewProduct` / `NewCartItem` request shapes.
//!  - `Price`, a fixed-point amount stored in integer minor units (cents).
//!  - The `ShopRepository` trait, the seam the web layer talks to.
//!  - `InMemoryStore`, a mutex-guarded implementation seeded with sample data.

pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{CartItem, CartItemId, NewCartItem, NewProduct, Price, PriceParseError, Product, ProductId};
pub use crate::repository::{ShopRepository, UpsertOutcome, Upserted};
pub use crate::store::InMemoryStore;

/*
    Request flow:
    1. The web layer decodes a request body into `NewProduct` / `NewCartItem`.
    2. It calls the matching `ShopRepository` method on the shared store.
    3. The store mutates its maps under a single lock and hands back owned snapshots,
       joining each cart line with its current `Product`.
    4. The web layer encodes the snapshot (or maps the `StoreError`) into a response.
*/
