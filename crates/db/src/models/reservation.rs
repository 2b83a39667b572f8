//! Reservation model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yoyaku_core::types::{DbId, Timestamp};

/// A row from the `reservations` table.
///
/// `has_certificate` holds the canonical stored form (`"0"` or `"1"`); it is
/// serialized as-is, and the client layer is responsible for reconciling the
/// string encoding into a strict boolean.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Reservation {
    pub id: DbId,
    pub date: NaiveDate,
    pub program: String,
    pub slot: String,
    pub room: Option<String>,
    pub name: String,
    pub contact: Option<String>,
    pub note: Option<String>,
    pub status: String,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notebook_type: Option<String>,
    pub has_certificate: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reservation.
///
/// `has_certificate` accepts whatever the caller sends (native boolean,
/// `"0"`/`"1"`, `"true"`/`"false"`, ...); the repository coerces it into the
/// stored form before the INSERT.
#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub date: NaiveDate,
    pub program: String,
    pub slot: String,
    pub room: Option<String>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub note: Option<String>,
    pub status: Option<String>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notebook_type: Option<String>,
    pub has_certificate: Option<serde_json::Value>,
}

/// DTO for partially updating a reservation. Absent fields stay unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReservation {
    pub date: Option<NaiveDate>,
    pub program: Option<String>,
    pub slot: Option<String>,
    pub room: Option<String>,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub note: Option<String>,
    pub status: Option<String>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notebook_type: Option<String>,
    pub has_certificate: Option<serde_json::Value>,
}

/// Query parameters for reservation listing.
#[derive(Debug, Default, Deserialize)]
pub struct ReservationListParams {
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub program: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
