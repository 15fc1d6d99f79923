//! Handlers for `/menu-categories` endpoints.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `GET`    | `/menu-categories` | public | sorted by display order |
//! | `GET`    | `/menu-categories/:id` | public | 404 if unknown |
//! | `POST`   | `/menu-categories` | staff | 201 + stored record |
//! | `PUT`    | `/menu-categories/:id` | staff | partial merge |
//! | `DELETE` | `/menu-categories/:id` | staff | no cascade to items |

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
  menu::{MenuCategory, MenuCategoryPatch, NewMenuCategory},
  store::RestaurantStore,
};

use crate::{AppState, auth::Staff, error::ApiError};

/// `GET /menu-categories`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<MenuCategory>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let categories = state
    .store
    .list_menu_categories()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(categories))
}

/// `GET /menu-categories/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
) -> Result<Json<MenuCategory>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let category = state
    .store
    .get_menu_category(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Category not found".into()))?;
  Ok(Json(category))
}

/// `POST /menu-categories` — returns 201 + the stored record.
pub async fn create<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Json(body): Json<NewMenuCategory>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let category = state
    .store
    .create_menu_category(body)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT /menu-categories/:id` — merges only the supplied fields.
pub async fn update<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
  Json(body): Json<MenuCategoryPatch>,
) -> Result<Json<MenuCategory>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let category = state
    .store
    .update_menu_category(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Category not found".into()))?;
  Ok(Json(category))
}

/// `DELETE /menu-categories/:id`
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
    .delete_menu_category(id)
    .await
    .map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::NotFound("Category not found".into()));
  }
  Ok(Json(json!({ "message": "Category deleted successfully" })))
}
