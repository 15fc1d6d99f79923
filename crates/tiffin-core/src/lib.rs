//! Core types and trait definitions for the Tiffin restaurant backend.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod gallery;
pub mod menu;
pub mod reservation;
pub mod restaurant;
pub mod store;
pub mod testimonial;
pub mod user;

pub use error::{Error, Result};

/// Store-assigned synthetic identifier. Monotonic from 1 per entity type and
/// never reused within a process lifetime, even after deletion.
pub type Id = i32;
