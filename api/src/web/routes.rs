// api/src/web/routes.rs

use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::state::AppState;
use crate::web::handlers::{cart_handlers, product_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// `GET /` sends browsers on to the API docs.
async fn root_redirect_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Found()
    .insert_header((header::LOCATION, app_state.config.docs_path.as_str()))
    .finish()
}

// This function will be called from `create_app` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(root_redirect_handler))
    .route("/health", web::get().to(health_check_handler))
    // Products
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
    )
    // Cart
    .service(
      web::scope("/cart")
        .route("", web::get().to(cart_handlers::list_cart_items_handler))
        .route("", web::post().to(cart_handlers::add_to_cart_handler))
        .route("/{id}", web::get().to(cart_handlers::get_cart_item_handler))
        .route("/{id}", web::delete().to(cart_handlers::delete_cart_item_handler)),
    );
}
