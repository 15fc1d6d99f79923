//! Tiffin server assembly: configuration, seed data, and the top-level
//! router that mounts the JSON API under `/api`.

pub mod seed;

use serde::Deserialize;
use tiffin_api::AppState;
use tiffin_core::store::RestaurantStore;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with
/// `TIFFIN_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  /// Username of the staff account created at startup.
  pub admin_username:      String,
  /// Argon2 PHC string for the staff account. Generate one with
  /// `server --hash-password`.
  pub admin_password_hash: String,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the top-level router: the JSON API under `/api`, with request
/// tracing on every route.
pub fn router<S>(state: AppState<S>) -> axum::Router
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  axum::Router::new()
    .nest("/api", tiffin_api::api_router(state))
    .layer(TraceLayer::new_for_http())
}
