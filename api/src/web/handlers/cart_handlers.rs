// api/src/web/handlers/cart_handlers.rs

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use shopping_cart_core::{CartItemId, NewCartItem, UpsertOutcome};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_cart_items", skip(app_state))]
pub async fn list_cart_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.repository.list_cart_items().await;
  info!("Fetched {} cart items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::get_cart_item", skip(app_state, path), fields(cart_item_id = %path.as_ref()))]
pub async fn get_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<CartItemId>,
) -> Result<HttpResponse, AppError> {
  let item = app_state.repository.get_cart_item(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewCartItem>,
) -> Result<HttpResponse, AppError> {
  let NewCartItem { product_id, quantity } = req_payload.into_inner();

  let upserted = app_state
    .repository
    .upsert_cart_item(product_id, quantity)
    .await
    .inspect_err(|e| warn!("Add to cart failed for product {}: {}", product_id, e))?;

  let item = upserted.item;
  match upserted.outcome {
    UpsertOutcome::Created => info!("Cart item {} created for product {}.", item.id, product_id),
    UpsertOutcome::Merged => info!(
      "Cart item {} for product {} merged. New quantity: {}",
      item.id, product_id, item.quantity
    ),
  }

  // Created is returned for both outcomes; Location always points at the surviving line.
  Ok(HttpResponse::Created()
    .insert_header((header::LOCATION, format!("/cart/{}", item.id)))
    .json(item))
}

#[instrument(name = "handler::delete_cart_item", skip(app_state, path), fields(cart_item_id = %path.as_ref()))]
pub async fn delete_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<CartItemId>,
) -> Result<HttpResponse, AppError> {
  let cart_item_id = path.into_inner();
  app_state.repository.remove_cart_item(cart_item_id).await?;
  info!("Cart item {} deleted.", cart_item_id);
  Ok(HttpResponse::NoContent().finish())
}
