//! Handlers for the reservation endpoints.
//!
//! Provides creation, retrieval, partial update, and filtered/paginated
//! listing. Certificate-flag coercion and name derivation happen in the
//! repository layer immediately before each write.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use yoyaku_core::error::CoreError;
use yoyaku_core::pagination::{clamp_page, clamp_per_page, last_page};
use yoyaku_core::types::DbId;
use yoyaku_db::models::reservation::{
    CreateReservation, ReservationListParams, UpdateReservation,
};
use yoyaku_db::repositories::ReservationRepo;

use crate::error::AppResult;
use crate::response::Paginated;
use crate::state::AppState;

/// GET /reservations?date=&status=&program=&page=&per_page=
///
/// List reservations with optional filters, wrapped in the pagination
/// envelope.
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(params): Query<ReservationListParams>,
) -> AppResult<impl IntoResponse> {
    let data = ReservationRepo::list(&state.pool, &params).await?;
    let total = ReservationRepo::count(&state.pool, &params).await?;

    let per_page = clamp_per_page(params.per_page);
    Ok(Json(Paginated {
        data,
        current_page: clamp_page(params.page),
        last_page: last_page(total, per_page),
        per_page,
        total,
    }))
}

/// POST /reservations
///
/// Create a new reservation. `date`, `program`, and `slot` are required;
/// everything else is optional.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        reservation_id = reservation.id,
        date = %reservation.date,
        program = %reservation.program,
        slot = %reservation.slot,
        "Reservation created"
    );

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /reservations/{id}
///
/// Get a single reservation by ID.
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reservation",
            id,
        })?;

    Ok(Json(reservation))
}

/// PATCH /reservations/{id}
///
/// Partially update a reservation; absent fields stay unchanged.
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Reservation",
            id,
        })?;

    tracing::info!(reservation_id = id, "Reservation updated");

    Ok(Json(reservation))
}
