// core/src/models/product.rs

use serde::{Deserialize, Serialize};

use super::Price;

pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId, // Assigned by the store, never by the client
  pub name: String,
  pub price: Price,
}

/// Body of `POST /products`. A client-supplied `id` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
  pub name: String,
  pub price: Price,
}

impl NewProduct {
  pub fn new(name: impl Into<String>, price: Price) -> Self {
    Self { name: name.into(), price }
  }

  pub(crate) fn into_product(self, id: ProductId) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
    }
  }
}
