//! Handlers for `/gallery` endpoints.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `GET`    | `/gallery` | public | sorted by display order |
//! | `GET`    | `/gallery/category/:category` | public | tag match, e.g. `food` |
//! | `GET`    | `/gallery/:id` | public | 404 if unknown |
//! | `POST`   | `/gallery` | staff | 201 + stored record |
//! | `PUT`    | `/gallery/:id` | staff | partial merge |
//! | `DELETE` | `/gallery/:id` | staff | |

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
  gallery::{GalleryImage, GalleryImagePatch, NewGalleryImage},
  store::RestaurantStore,
};

use crate::{AppState, auth::Staff, error::ApiError};

/// `GET /gallery`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<GalleryImage>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let images = state
    .store
    .list_gallery_images()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(images))
}

/// `GET /gallery/category/:category` — the category here is a free-form tag
/// (`food`, `interior`, ...), not a menu category id.
pub async fn by_category<S>(
  State(state): State<AppState<S>>,
  Path(category): Path<String>,
) -> Result<Json<Vec<GalleryImage>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let images = state
    .store
    .gallery_images_by_category(&category)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(images))
}

/// `GET /gallery/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
) -> Result<Json<GalleryImage>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let image = state
    .store
    .get_gallery_image(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Gallery image not found".into()))?;
  Ok(Json(image))
}

/// `POST /gallery` — returns 201 + the stored record.
pub async fn create<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Json(body): Json<NewGalleryImage>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let image = state
    .store
    .create_gallery_image(body)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(image)))
}

/// `PUT /gallery/:id` — merges only the supplied fields.
pub async fn update<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
  Json(body): Json<GalleryImagePatch>,
) -> Result<Json<GalleryImage>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let image = state
    .store
    .update_gallery_image(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Gallery image not found".into()))?;
  Ok(Json(image))
}

/// `DELETE /gallery/:id`
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
    .delete_gallery_image(id)
    .await
    .map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::NotFound("Gallery image not found".into()));
  }
  Ok(Json(json!({ "message": "Gallery image deleted successfully" })))
}
