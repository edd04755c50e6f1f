// core/src/store.rs

//! `InMemoryStore`: the process-local implementation of `ShopRepository`.
//!
//! Both record maps and both id counters live behind one `parking_lot::Mutex`,
//! so every repository call observes and mutates a consistent state.
//!
//! IMPORTANT: the guard is blocking and is never held across an `.await`.
//! None of the trait methods await while locked.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{CartItem, CartItemId, NewProduct, Product, ProductId};
use crate::repository::{ShopRepository, UpsertOutcome, Upserted};
use crate::seed;

/// A cart line as stored: the product is referenced by id only and joined on read.
#[derive(Debug, Clone, Copy)]
struct CartLine {
  id: CartItemId,
  product_id: ProductId,
  quantity: i32,
}

#[derive(Debug)]
struct StoreState {
  products: BTreeMap<ProductId, Product>,
  cart_lines: BTreeMap<CartItemId, CartLine>,
  // Ids are handed out monotonically and never reused, even after deletes.
  next_product_id: ProductId,
  next_cart_item_id: CartItemId,
}

impl Default for StoreState {
  fn default() -> Self {
    Self {
      products: BTreeMap::new(),
      cart_lines: BTreeMap::new(),
      next_product_id: 1,
      next_cart_item_id: 1,
    }
  }
}

impl StoreState {
  fn allocate(counter: &mut i32, entity: &'static str) -> StoreResult<i32> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(StoreError::IdsExhausted { entity })?;
    Ok(id)
  }

  fn insert_product(&mut self, new_product: NewProduct) -> StoreResult<Product> {
    let id = Self::allocate(&mut self.next_product_id, "products")?;
    let product = new_product.into_product(id);
    self.products.insert(id, product.clone());
    Ok(product)
  }

  /// Explicit join of a cart line with the current product record.
  fn join(&self, line: &CartLine) -> Option<CartItem> {
    let product = self.products.get(&line.product_id)?;
    Some(CartItem {
      id: line.id,
      product_id: line.product_id,
      product: product.clone(),
      quantity: line.quantity,
    })
  }

  fn line_for_product(&self, product_id: ProductId) -> Option<&CartLine> {
    self.cart_lines.values().find(|line| line.product_id == product_id)
  }
}

/// In-memory product and cart store. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
  state: Mutex<StoreState>,
}

impl InMemoryStore {
  /// An empty store; ids start at 1.
  pub fn new() -> Self {
    Self::default()
  }

  /// A store holding `seed::sample_products()` and an empty cart.
  pub fn seeded() -> Self {
    let store = Self::new();
    {
      let mut state = store.state.lock();
      for new_product in seed::sample_products() {
        // A fresh store cannot run out of ids while seeding a handful of rows.
        if let Err(e) = state.insert_product(new_product) {
          warn!(error = %e, "Skipping seed product.");
        }
      }
      info!(products = state.products.len(), "Store seeded with sample products.");
    }
    store
  }
}

#[async_trait]
impl ShopRepository for InMemoryStore {
  async fn list_products(&self) -> Vec<Product> {
    self.state.lock().products.values().cloned().collect()
  }

  async fn get_product(&self, id: ProductId) -> StoreResult<Product> {
    self.state.lock().products.get(&id).cloned().ok_or(StoreError::ProductNotFound(id))
  }

  #[instrument(name = "store::add_product", skip(self, new_product), fields(name = %new_product.name))]
  async fn add_product(&self, new_product: NewProduct) -> StoreResult<Product> {
    let product = self.state.lock().insert_product(new_product)?;
    debug!(product_id = product.id, "Product stored.");
    Ok(product)
  }

  #[instrument(name = "store::remove_product", skip(self))]
  async fn remove_product(&self, id: ProductId) -> StoreResult<()> {
    let mut state = self.state.lock();
    state.products.remove(&id).ok_or(StoreError::ProductNotFound(id))?;

    // Keep every remaining cart line pointing at an existing product.
    let before = state.cart_lines.len();
    state.cart_lines.retain(|_, line| line.product_id != id);
    let dropped = before - state.cart_lines.len();
    if dropped > 0 {
      debug!(dropped, "Removed cart lines referencing the deleted product.");
    }
    Ok(())
  }

  async fn list_cart_items(&self) -> Vec<CartItem> {
    let state = self.state.lock();
    state.cart_lines.values().filter_map(|line| state.join(line)).collect()
  }

  async fn get_cart_item(&self, id: CartItemId) -> StoreResult<CartItem> {
    let state = self.state.lock();
    state
      .cart_lines
      .get(&id)
      .and_then(|line| state.join(line))
      .ok_or(StoreError::CartItemNotFound(id))
  }

  async fn find_cart_item_by_product_id(&self, product_id: ProductId) -> Option<CartItem> {
    let state = self.state.lock();
    state.line_for_product(product_id).and_then(|line| state.join(line))
  }

  #[instrument(name = "store::upsert_cart_item", skip(self))]
  async fn upsert_cart_item(&self, product_id: ProductId, quantity: i32) -> StoreResult<Upserted> {
    let mut state = self.state.lock();
    if !state.products.contains_key(&product_id) {
      return Err(StoreError::UnknownProduct(product_id));
    }

    let (line, outcome) = match state.line_for_product(product_id).copied() {
      Some(existing) => {
        let merged_quantity = existing
          .quantity
          .checked_add(quantity)
          .ok_or(StoreError::QuantityOverflow {
            cart_item_id: existing.id,
            current: existing.quantity,
            added: quantity,
          })?;
        let line = CartLine {
          quantity: merged_quantity,
          ..existing
        };
        state.cart_lines.insert(line.id, line);
        (line, UpsertOutcome::Merged)
      }
      None => {
        let id = StoreState::allocate(&mut state.next_cart_item_id, "cart items")?;
        let line = CartLine {
          id,
          product_id,
          quantity,
        };
        state.cart_lines.insert(id, line);
        (line, UpsertOutcome::Created)
      }
    };

    debug!(cart_item_id = line.id, quantity = line.quantity, ?outcome, "Cart line upserted.");
    let item = state.join(&line).ok_or(StoreError::UnknownProduct(product_id))?;
    Ok(Upserted { item, outcome })
  }

  #[instrument(name = "store::remove_cart_item", skip(self))]
  async fn remove_cart_item(&self, id: CartItemId) -> StoreResult<()> {
    self
      .state
      .lock()
      .cart_lines
      .remove(&id)
      .map(|_| ())
      .ok_or(StoreError::CartItemNotFound(id))
  }
}
