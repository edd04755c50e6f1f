// core/src/models/cart_item.rs

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

pub type CartItemId = i32;

/// A cart line joined with the current state of its product.
///
/// The store keeps only `product_id`; `product` is filled in at read time,
/// so it always reflects the product record as it is now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: CartItemId,
  pub product_id: ProductId,
  pub product: Product,
  pub quantity: i32,
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
  pub product_id: ProductId,
  pub quantity: i32,
}
