// api/src/web/handlers/product_handlers.rs

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use shopping_cart_core::{NewProduct, ProductId};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.repository.list_products().await;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = app_state.repository.get_product(product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(
    name = "handler::create_product",
    skip(app_state, req_payload),
    fields(name = %req_payload.name, price = %req_payload.price)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.repository.add_product(req_payload.into_inner()).await?;
  info!("Product {} created.", product.id);

  Ok(HttpResponse::Created()
    .insert_header((header::LOCATION, format!("/products/{}", product.id)))
    .json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.repository.remove_product(product_id).await?;
  info!("Product {} deleted.", product_id);
  Ok(HttpResponse::NoContent().finish())
}
