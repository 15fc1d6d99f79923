//! Handlers for `/reservations` endpoints.
//!
//! | Method | Path | Auth | Notes |
//! |--------|------|------|-------|
//! | `POST` | `/reservations` | public | guest booking form; 201 + pending record |
//! | `GET`  | `/reservations` | staff | newest first |
//! | `GET`  | `/reservations/:id` | staff | 404 if unknown |
//! | `PUT`  | `/reservations/:id/status` | staff | body `{"status": "..."}` |
//!
//! Submission is the one public write in the API. Whatever status or
//! timestamp a client includes in the payload is discarded; the store stamps
//! every new reservation as pending.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate as _;

use tiffin_core::{
  Id,
  reservation::{NewReservation, Reservation, ReservationStatus},
  store::RestaurantStore,
};

use crate::{AppState, auth::Staff, error::ApiError};

/// `POST /reservations` — returns 201 + the stored record.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<NewReservation>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  body.validate()?;
  let reservation = state
    .store
    .create_reservation(body)
    .await
    .map_err(ApiError::store)?;

  tracing::info!(
    id = reservation.id,
    date = %reservation.date,
    guests = reservation.guests,
    "reservation received"
  );

  Ok((StatusCode::CREATED, Json(reservation)))
}

/// `GET /reservations` — newest first.
pub async fn list<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Reservation>>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let reservations = state
    .store
    .list_reservations()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(reservations))
}

/// `GET /reservations/:id`
pub async fn get_one<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
) -> Result<Json<Reservation>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let reservation = state
    .store
    .get_reservation(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Reservation not found".into()))?;
  Ok(Json(reservation))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: String,
}

/// `PUT /reservations/:id/status`
///
/// The status arrives as a plain string and is parsed here rather than by
/// the deserializer, so an unrecognized value comes back as a 400 with a
/// readable message instead of a body-rejection.
pub async fn set_status<S>(
  _staff: Staff,
  State(state): State<AppState<S>>,
  Path(id): Path<Id>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Reservation>, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let status: ReservationStatus = body
    .status
    .parse()
    .map_err(|_| ApiError::BadRequest("Invalid status".into()))?;

  let reservation = state
    .store
    .set_reservation_status(id, status)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Reservation not found".into()))?;

  tracing::info!(id, status = %status, "reservation status updated");

  Ok(Json(reservation))
}
