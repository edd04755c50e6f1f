// core/src/models/mod.rs

//! Contains data structures representing store records and request shapes.

pub mod cart_item;
pub mod price;
pub mod product;

pub use cart_item::{CartItem, CartItemId, NewCartItem};
pub use price::{Price, PriceParseError};
pub use product::{NewProduct, Product, ProductId};
