//! In-memory backend for the Tiffin restaurant store.
//!
//! Storage is volatile by design: every record lives in a process-local map
//! behind one async `RwLock`, and a restart loses everything except what the
//! server seeds at startup. The single lock serialises id generation and the
//! username-uniqueness check so neither can race under a multi-threaded
//! runtime.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemStore;
