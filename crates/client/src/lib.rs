//! Typed client for the reservation API.
//!
//! The server's JSON is loosely typed where it matters most: the certificate
//! flag arrives as a native boolean, `"0"`/`"1"`, `"true"`/`"false"`, or not
//! at all, and dates arrive as bare calendar dates or full timestamps. This
//! crate decodes that wire shape tolerantly ([`wire`]), normalizes it into a
//! strict internal representation ([`normalize`]), and shapes outgoing
//! payloads back into the form the server expects ([`payload`]).

pub mod api;
pub mod normalize;
pub mod payload;
pub mod wire;

pub use api::{ClientError, ListQuery, ReservationsApi};
pub use normalize::{normalize, Reservation};
pub use payload::{CreateReservationInput, UpdateReservationInput};
pub use wire::{Paginated, WireReservation};
