//! Handlers for `/menu-items` endpoints.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `GET`    | `/menu-items` | public | sorted by display order |
//! | `GET`    | `/menu-items/featured` | public | available + featured only |
//! | `GET`    | `/menu-items/category/:category_id` | public | scoped listing |
//! | `GET`    | `/menu-items/:id` | public | 404 if unknown |
//! | `POST`   | `/menu-items` | staff | 201 + stored record |
//! | `PUT`    | `/menu-items/:id` | staff | partial merge |
//! | `DELETE` | `/menu-items/:id` | staff | |
//!
//! The two literal-segment routes (`/featured`, `/category/...`) are
//! registered before `/:id` so the router never tries to parse them as ids.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::json;
use validator::Validate as _;

use tiffin_core::{
  Id,
  menu::{MenuItem, MenuItemPatch, NewMenuItem},
  store::RestaurantStore,
};

use crate::{AppState, auth::Staff, error::ApiError};

/// `GET /menu-items`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<MenuItem>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let items = state
    .store
    .list_menu_items()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(items))
}

/// `GET /menu-items/featured`
pub async fn featured<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<MenuItem>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let items = state
    .store
    .featured_menu_items()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(items))
}

/// `GET /menu-items/category/:category_id` — empty list for an unknown
/// category, never a 404.
pub async fn by_category<S>(
  State(state): State<AppState<S>>,
  Path(category_id): Path<Id>,
) -> Result<Json<Vec<MenuItem>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let items = state
    .store
    .menu_items_by_category(category_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(items))
}

/// `GET /menu-items/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
) -> Result<Json<MenuItem>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let item = state
    .store
    .get_menu_item(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Menu item not found".into()))?;
  Ok(Json(item))
}

/// `POST /menu-items` — returns 201 + the stored record.
pub async fn create<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Json(body): Json<NewMenuItem>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let item = state
    .store
    .create_menu_item(body)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /menu-items/:id` — merges only the supplied fields.
pub async fn update<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
  Json(body): Json<MenuItemPatch>,
) -> Result<Json<MenuItem>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let item = state
    .store
    .update_menu_item(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Menu item not found".into()))?;
  Ok(Json(item))
}

/// `DELETE /menu-items/:id`
pub async fn delete_one<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let deleted = state
    .store
    .delete_menu_item(id)
    .await
    .map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::NotFound("Menu item not found".into()));
  }
  Ok(Json(json!({ "message": "Menu item deleted successfully" })))
}
