pub mod health;
pub mod reservations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /reservations          list (GET), create (POST)
/// /reservations/{id}     get (GET), partial update (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/reservations", reservations::router())
}
