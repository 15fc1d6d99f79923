//! Handlers for `/testimonials` endpoints.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `GET`    | `/testimonials` | public | insertion order |
//! | `GET`    | `/testimonials/:id` | public | 404 if unknown |
//! | `POST`   | `/testimonials` | staff | 201 + stored record |
//! | `PUT`    | `/testimonials/:id` | staff | partial merge |
//! | `DELETE` | `/testimonials/:id` | staff | |

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
  store::RestaurantStore,
  testimonial::{NewTestimonial, Testimonial, TestimonialPatch},
};

use crate::{AppState, auth::Staff, error::ApiError};

/// `GET /testimonials`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Testimonial>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let testimonials = state
    .store
    .list_testimonials()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(testimonials))
}

/// `GET /testimonials/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
) -> Result<Json<Testimonial>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let testimonial = state
    .store
    .get_testimonial(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Testimonial not found".into()))?;
  Ok(Json(testimonial))
}

/// `POST /testimonials` — returns 201 + the stored record.
pub async fn create<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Json(body): Json<NewTestimonial>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let testimonial = state
    .store
    .create_testimonial(body)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(testimonial)))
}

/// `PUT /testimonials/:id` — merges only the supplied fields.
pub async fn update<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
  Json(body): Json<TestimonialPatch>,
) -> Result<Json<Testimonial>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let testimonial = state
    .store
    .update_testimonial(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Testimonial not found".into()))?;
  Ok(Json(testimonial))
}

/// `DELETE /testimonials/:id`
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
    .delete_testimonial(id)
    .await
    .map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::NotFound("Testimonial not found".into()));
  }
  Ok(Json(json!({ "message": "Testimonial deleted successfully" })))
}
