//! Reservation types and the status lifecycle.
//!
//! A reservation is created `pending` with a server-assigned `created_at`;
//! neither field is ever accepted from a client payload. Status then changes
//! only through the dedicated `set_reservation_status` operation. Transitions
//! are deliberately permissive — staff may move a reservation between any of
//! the three statuses (e.g. un-cancel one booked by mistake); only the
//! literal set of statuses is validated.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{Error, Id};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a reservation sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
  /// Initial status, set automatically on creation.
  Pending,
  Confirmed,
  Cancelled,
}

impl ReservationStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::Confirmed => "confirmed",
      Self::Cancelled => "cancelled",
    }
  }
}

impl fmt::Display for ReservationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ReservationStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(Self::Pending),
      "confirmed" => Ok(Self::Confirmed),
      "cancelled" => Ok(Self::Cancelled),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── Reservation ─────────────────────────────────────────────────────────────

/// A table booking submitted through the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
  pub id:         Id,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  /// Calendar date, `YYYY-MM-DD`.
  pub date:       String,
  /// Time of day, `HH:MM` (24-hour).
  pub time:       String,
  pub guests:     i32,
  pub occasion:   Option<String>,
  pub message:    Option<String>,
  pub status:     ReservationStatus,
  /// Server-assigned at creation; immutable afterwards.
  pub created_at: DateTime<Utc>,
}

/// Input to `create_reservation`. Client-supplied `status` and `createdAt`
/// keys are ignored during deserialisation — the store forces both.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
  #[validate(length(min = 1))]
  pub name:     String,
  #[validate(email)]
  pub email:    String,
  #[validate(length(min = 7))]
  pub phone:    String,
  #[validate(custom(function = validate_date))]
  pub date:     String,
  #[validate(custom(function = validate_time))]
  pub time:     String,
  #[validate(range(min = 1, max = 20))]
  pub guests:   i32,
  pub occasion: Option<String>,
  pub message:  Option<String>,
}

/// `YYYY-MM-DD` check for [`NewReservation::date`].
fn validate_date(date: &str) -> Result<(), ValidationError> {
  NaiveDate::parse_from_str(date, "%Y-%m-%d")
    .map(|_| ())
    .map_err(|_| ValidationError::new("date_format"))
}

/// `HH:MM` (24-hour) check for [`NewReservation::time`].
fn validate_time(time: &str) -> Result<(), ValidationError> {
  NaiveTime::parse_from_str(time, "%H:%M")
    .map(|_| ())
    .map_err(|_| ValidationError::new("time_format"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_round_trips_through_str() {
    for status in [
      ReservationStatus::Pending,
      ReservationStatus::Confirmed,
      ReservationStatus::Cancelled,
    ] {
      assert_eq!(status.as_str().parse::<ReservationStatus>().unwrap(), status);
    }
  }

  #[test]
  fn bogus_status_is_rejected() {
    let err = "bogus".parse::<ReservationStatus>().unwrap_err();
    assert!(matches!(err, Error::UnknownStatus(s) if s == "bogus"));
  }

  #[test]
  fn date_and_time_formats() {
    assert!(validate_date("2024-06-01").is_ok());
    assert!(validate_date("June 1st").is_err());
    assert!(validate_time("19:00").is_ok());
    assert!(validate_time("7 pm").is_err());
  }

  #[test]
  fn client_supplied_status_is_ignored() {
    let input: NewReservation = serde_json::from_str(
      r#"{
        "name": "A",
        "email": "a@b.com",
        "phone": "5551234567",
        "date": "2024-06-01",
        "time": "19:00",
        "guests": 2,
        "status": "confirmed",
        "createdAt": "2020-01-01T00:00:00Z"
      }"#,
    )
    .unwrap();
    assert!(input.validate().is_ok());
  }
}
