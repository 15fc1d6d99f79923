//! Handlers for the two singleton resources.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `GET`  | `/restaurant-info` | public | 404 until first upsert |
//! | `PUT`  | `/restaurant-info` | staff | full-field upsert |
//! | `GET`  | `/about` | public | 404 until first upsert |
//! | `PUT`  | `/about` | staff | full-field upsert |

use axum::{Json, extract::State};
use validator::Validate as _;

use tiffin_core::{
  restaurant::{AboutSection, NewAboutSection, NewRestaurantInfo, RestaurantInfo},
  store::RestaurantStore,
};

use crate::{AppState, auth::Staff, error::ApiError};

/// `GET /restaurant-info`
pub async fn get_info<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<RestaurantInfo>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let info = state
    .store
    .restaurant_info()
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Restaurant info not found".into()))?;
  Ok(Json(info))
}

/// `PUT /restaurant-info` — full replace; creates the row on first call.
pub async fn put_info<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Json(body): Json<NewRestaurantInfo>,
) -> Result<Json<RestaurantInfo>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let info = state
    .store
    .upsert_restaurant_info(body)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(info))
}

/// `GET /about`
pub async fn get_about<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<AboutSection>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let about = state
    .store
    .about_section()
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("About section not found".into()))?;
  Ok(Json(about))
}

/// `PUT /about` — full replace; creates the row on first call.
pub async fn put_about<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Json(body): Json<NewAboutSection>,
) -> Result<Json<AboutSection>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let about = state
    .store
    .upsert_about_section(body)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(about))
}
