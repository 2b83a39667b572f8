//! Domain types and pure logic for the reservation service.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the HTTP server, and the API client alike.

pub mod error;
pub mod flag;
pub mod pagination;
pub mod reservation;
pub mod types;
