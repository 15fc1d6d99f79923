//! Staff accounts for the admin console.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

/// An admin-console account. `username` is unique — the store rejects a
/// duplicate atomically at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
  pub id:       Id,
  pub username: String,
  /// Argon2 PHC string, e.g. `$argon2id$v=19$…` — never a plaintext password.
  /// Excluded from serialisation so it can never leak into a response body.
  #[serde(skip_serializing)]
  pub password: String,
  pub role:     String,
}

/// Input to `create_user`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
  #[validate(length(min = 1))]
  pub username: String,
  #[validate(length(min = 1))]
  pub password: String,
  #[validate(length(min = 1))]
  pub role:     String,
}
