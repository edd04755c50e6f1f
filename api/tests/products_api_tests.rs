// tests/products_api_tests.rs
mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use common::*;
use serde_json::json;
use shopping_cart_api::create_app;
use shopping_cart_core::{Price, Product};

#[actix_web::test]
async fn test_list_products_returns_seed() {
  let app = test::init_service(create_app(seeded_state())).await;

  let req = test::TestRequest::get().uri("/products").to_request();
  let products: Vec<Product> = test::call_and_read_body_json(&app, req).await;

  assert_eq!(products.len(), 3);
  assert_eq!(products[0].id, WIDGET_ID);
  assert_eq!(products[0].name, "Widget");
  assert_eq!(products[0].price, Price::from_cents(999));
}

#[actix_web::test]
async fn test_create_then_get_product() {
  let app = test::init_service(create_app(seeded_state())).await;

  let req = test::TestRequest::post()
    .uri("/products")
    .set_json(json!({"name": "Sprocket", "price": 12.5}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();
  let created: Product = test::read_body_json(resp).await;
  assert_eq!(location, format!("/products/{}", created.id));
  assert_eq!(created.name, "Sprocket");
  assert_eq!(created.price, Price::from_cents(1250));

  let req = test::TestRequest::get().uri(&location).to_request();
  let fetched: Product = test::call_and_read_body_json(&app, req).await;
  assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_create_product_ignores_client_id() {
  let app = test::init_service(create_app(seeded_state())).await;

  let req = test::TestRequest::post()
    .uri("/products")
    .set_json(json!({"id": WIDGET_ID, "name": "Impostor", "price": 1}))
    .to_request();
  let created: Product = test::call_and_read_body_json(&app, req).await;
  assert_ne!(created.id, WIDGET_ID);

  let req = test::TestRequest::get().uri("/products/1").to_request();
  let widget: Product = test::call_and_read_body_json(&app, req).await;
  assert_eq!(widget.name, "Widget");
}

#[actix_web::test]
async fn test_create_product_with_missing_field_is_bad_request() {
  let app = test::init_service(create_app(seeded_state())).await;

  let req = test::TestRequest::post()
    .uri("/products")
    .set_json(json!({"name": "No price"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let req = test::TestRequest::post()
    .uri("/products")
    .insert_header(header::ContentType::json())
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_missing_product_is_not_found() {
  let app = test::init_service(create_app(seeded_state())).await;

  let req = test::TestRequest::get().uri("/products/999").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_integer_product_id_is_not_found() {
  let app = test::init_service(create_app(seeded_state())).await;

  for uri in ["/products/abc", "/products/1.5"] {
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", uri);
  }
}

#[actix_web::test]
async fn test_delete_product_then_get_is_not_found() {
  let app = test::init_service(create_app(seeded_state())).await;

  let req = test::TestRequest::delete().uri("/products/2").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let req = test::TestRequest::get().uri("/products/2").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  // A second delete of the same id is a 404, not a 204.
  let req = test::TestRequest::delete().uri("/products/2").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
