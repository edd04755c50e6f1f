// core/src/error.rs
use thiserror::Error;

use crate::models::{CartItemId, ProductId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("Product not found: {0}")]
  ProductNotFound(ProductId),

  #[error("Cart item not found: {0}")]
  CartItemNotFound(CartItemId),

  // Raised by the cart upsert when `productId` does not resolve.
  // Kept apart from `ProductNotFound` because the HTTP layer reports it with a message body.
  #[error("Product not found")]
  UnknownProduct(ProductId),

  #[error("Quantity overflow for cart item {cart_item_id}: {current} + {added}")]
  QuantityOverflow {
    cart_item_id: CartItemId,
    current: i32,
    added: i32,
  },

  #[error("No identifiers left for {entity}")]
  IdsExhausted { entity: &'static str },
}

impl StoreError {
  /// True for every variant that means "the referenced record does not exist".
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      StoreError::ProductNotFound(_) | StoreError::CartItemNotFound(_) | StoreError::UnknownProduct(_)
    )
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
