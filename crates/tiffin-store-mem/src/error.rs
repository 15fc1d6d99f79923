//! Error type for `tiffin-store-mem`.
//!
//! "Not found" is never an error here — lookups return `Option` and deletes
//! return `bool` through the trait. The only hard failure a purely in-memory
//! backend can produce is a username collision.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("username {0:?} is already taken")]
  UsernameTaken(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
