//! Route definitions for reservations.
//!
//! Mounted at `/reservations` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Reservation routes.
///
/// ```text
/// GET    /       -> list_reservations (?date, status, program, page, per_page)
/// POST   /       -> create_reservation
/// GET    /{id}   -> get_reservation
/// PATCH  /{id}   -> update_reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/{id}",
            get(reservations::get_reservation).patch(reservations::update_reservation),
        )
}
