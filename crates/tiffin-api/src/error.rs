//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Expected outcomes (validation failure, missing record, missing session)
//! become structured 4xx bodies. Anything the store reports as a hard error
//! is logged server-side and collapsed into a generic 500 — internals never
//! reach the caller.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Payload failed schema validation; carries per-field detail.
  #[error("invalid data")]
  Validation(#[from] ValidationErrors),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// No valid session on a gated endpoint.
  #[error("unauthorized")]
  Unauthorized,

  /// Login with an unknown username or a wrong password. Deliberately one
  /// variant for both, so responses don't reveal which part was wrong.
  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend error for the 500 path.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(errors) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Invalid data", "errors": errors })),
      )
        .into_response(),
      ApiError::BadRequest(message) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": message })),
      )
        .into_response(),
      ApiError::Unauthorized => (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Unauthorized" })),
      )
        .into_response(),
      ApiError::InvalidCredentials => (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid credentials" })),
      )
        .into_response(),
      ApiError::NotFound(message) => (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": message })),
      )
        .into_response(),
      ApiError::Store(err) => {
        tracing::error!(error = %err, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": "Internal server error" })),
        )
          .into_response()
      }
    }
  }
}
