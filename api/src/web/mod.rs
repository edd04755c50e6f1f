// api/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use crate::errors::AppError;
use crate::state::AppState;

pub use routes::configure_app_routes;

/// Any origin, method and header is allowed; the wildcard origin is sent back as `*`.
pub fn cors_policy() -> Cors {
  Cors::default()
    .allow_any_origin()
    .send_wildcard()
    .allow_any_method()
    .allow_any_header()
}

/// Turns body decoding failures into `AppError::BadRequest`.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Builds the application served by each worker; tests use it with `actix_web::test::init_service`.
pub fn create_app(
  app_state: web::Data<AppState>,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(app_state) // Share AppState with handlers
    .app_data(json_config())
    .wrap(cors_policy())
    .wrap(TracingLogger::default()) // Actix middleware for tracing requests
    .configure(configure_app_routes)
}
