//! JSON REST API for Tiffin.
//!
//! Exposes an axum [`Router`] backed by any
//! [`tiffin_core::store::RestaurantStore`]. Read endpoints are public; every
//! write except reservation submission requires a staff session cookie.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tiffin_api::api_router(state))
//! ```

pub mod auth;
pub mod categories;
pub mod error;
pub mod gallery;
pub mod items;
pub mod reservations;
pub mod restaurant;
pub mod session;
pub mod testimonials;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use tiffin_core::store::RestaurantStore;

pub use crate::{error::ApiError, session::SessionStore};

#[cfg(test)]
mod tests;

/// Shared state for every handler: the entity store plus the session map.
#[derive(Clone)]
pub struct AppState<S> {
  pub store:    Arc<S>,
  pub sessions: Arc<SessionStore>,
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Auth
    .route("/login", post(auth::login::<S>))
    .route("/logout", post(auth::logout::<S>))
    .route("/auth/check", get(auth::check::<S>))
    // Singletons
    .route(
      "/restaurant-info",
      get(restaurant::get_info::<S>).put(restaurant::put_info::<S>),
    )
    .route(
      "/about",
      get(restaurant::get_about::<S>).put(restaurant::put_about::<S>),
    )
    // Menu categories
    .route(
      "/menu-categories",
      get(categories::list::<S>).post(categories::create::<S>),
    )
    .route(
      "/menu-categories/{id}",
      get(categories::get_one::<S>)
        .put(categories::update::<S>)
        .delete(categories::delete_one::<S>),
    )
    // Menu items
    .route(
      "/menu-items",
      get(items::list::<S>).post(items::create::<S>),
    )
    .route("/menu-items/featured", get(items::featured::<S>))
    .route(
      "/menu-items/category/{category_id}",
      get(items::by_category::<S>),
    )
    .route(
      "/menu-items/{id}",
      get(items::get_one::<S>)
        .put(items::update::<S>)
        .delete(items::delete_one::<S>),
    )
    // Gallery
    .route(
      "/gallery",
      get(gallery::list::<S>).post(gallery::create::<S>),
    )
    .route("/gallery/category/{category}", get(gallery::by_category::<S>))
    .route(
      "/gallery/{id}",
      get(gallery::get_one::<S>)
        .put(gallery::update::<S>)
        .delete(gallery::delete_one::<S>),
    )
    // Testimonials
    .route(
      "/testimonials",
      get(testimonials::list::<S>).post(testimonials::create::<S>),
    )
    .route(
      "/testimonials/{id}",
      get(testimonials::get_one::<S>)
        .put(testimonials::update::<S>)
        .delete(testimonials::delete_one::<S>),
    )
    // Reservations
    .route(
      "/reservations",
      get(reservations::list::<S>).post(reservations::create::<S>),
    )
    .route("/reservations/{id}", get(reservations::get_one::<S>))
    .route("/reservations/{id}/status", put(reservations::set_status::<S>))
    .with_state(state)
}
