// core/src/repository.rs

//! Defines `ShopRepository`, the repository layer the HTTP handlers talk to.
//! Every method returns owned snapshots; callers never hold references into the store.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{CartItem, CartItemId, NewProduct, Product, ProductId};

/// Whether an upsert created a new cart line or merged into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
  Created,
  Merged,
}

/// Result of `ShopRepository::upsert_cart_item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted {
  pub item: CartItem,
  pub outcome: UpsertOutcome,
}

/// Find/add/remove/list operations over products and cart items.
///
/// Methods are async so that a database-backed implementation can sit behind
/// the same trait object as `InMemoryStore`.
#[async_trait]
pub trait ShopRepository: Send + Sync {
  async fn list_products(&self) -> Vec<Product>;

  async fn get_product(&self, id: ProductId) -> StoreResult<Product>;

  /// Stores `new_product` under a freshly assigned id and returns the stored value.
  async fn add_product(&self, new_product: NewProduct) -> StoreResult<Product>;

  /// Removes the product and every cart line that references it.
  async fn remove_product(&self, id: ProductId) -> StoreResult<()>;

  /// All cart lines, each joined with the current state of its product.
  async fn list_cart_items(&self) -> Vec<CartItem>;

  async fn get_cart_item(&self, id: CartItemId) -> StoreResult<CartItem>;

  async fn find_cart_item_by_product_id(&self, product_id: ProductId) -> Option<CartItem>;

  /// Adds `quantity` of `product_id` to the cart.
  ///
  /// Fails with `StoreError::UnknownProduct` when no product has that id. At most
  /// one line exists per product: an existing line has its quantity increased,
  /// otherwise a new line is created with a fresh id.
  async fn upsert_cart_item(&self, product_id: ProductId, quantity: i32) -> StoreResult<Upserted>;

  async fn remove_cart_item(&self, id: CartItemId) -> StoreResult<()>;
}
