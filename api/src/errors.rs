// api/src/errors.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use shopping_cart_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  // Malformed or incomplete request bodies.
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
      AppError::Store(StoreError::QuantityOverflow { .. }) => StatusCode::BAD_REQUEST,
      AppError::Store(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }

    match self {
      // The cart upsert reports an unresolved productId with a plain-text message.
      AppError::Store(e @ StoreError::UnknownProduct(_)) => HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(e.to_string()),
      // Unknown ids on the resource routes answer with an empty 404.
      AppError::Store(e) if e.is_not_found() => HttpResponse::NotFound().finish(),
      AppError::Store(e @ StoreError::QuantityOverflow { .. }) => {
        HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
      }
      AppError::Store(e) => {
        HttpResponse::InternalServerError().json(json!({"error": "Store operation failed", "detail": e.to_string()}))
      }
      AppError::BadRequest(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
