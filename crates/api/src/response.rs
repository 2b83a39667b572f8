//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Paginated `{ data, current_page, last_page, per_page, total }` envelope
/// used by list endpoints. Single resources are returned bare.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}
