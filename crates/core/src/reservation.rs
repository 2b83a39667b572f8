//! Reservation field types and save-time derivations.
//!
//! `Program`, `Slot`, and `Status` are open string enumerations: the server
//! may introduce new values at any time, so they are plain newtypes with a
//! recognized-values set used for documentation and soft validation, never
//! for exhaustive matching.

use serde::{Deserialize, Serialize};

/// Reservation program kind (e.g. tour vs. hands-on experience).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(pub String);

impl Program {
    pub const TOUR: &'static str = "tour";
    pub const EXPERIENCE: &'static str = "experience";

    /// Known program values; unrecognized values are still accepted.
    pub const RECOGNIZED: &'static [&'static str] = &[Self::TOUR, Self::EXPERIENCE];

    pub fn is_recognized(&self) -> bool {
        Self::RECOGNIZED.contains(&self.0.as_str())
    }
}

/// Time-of-day slot for a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub String);

impl Slot {
    pub const AM: &'static str = "am";
    pub const PM: &'static str = "pm";
    pub const FULL: &'static str = "full";

    /// Known slot values; unrecognized values are still accepted.
    pub const RECOGNIZED: &'static [&'static str] = &[Self::AM, Self::PM, Self::FULL];

    pub fn is_recognized(&self) -> bool {
        Self::RECOGNIZED.contains(&self.0.as_str())
    }
}

/// Reservation lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(pub String);

impl Status {
    pub const BOOKED: &'static str = "booked";
    pub const CANCELED: &'static str = "canceled";
    pub const PENDING: &'static str = "pending";

    /// Known status values; unrecognized values are still accepted.
    pub const RECOGNIZED: &'static [&'static str] =
        &[Self::BOOKED, Self::CANCELED, Self::PENDING];

    pub fn is_recognized(&self) -> bool {
        Self::RECOGNIZED.contains(&self.0.as_str())
    }
}

/// Derive the display name stored on a reservation.
///
/// Returns the existing name when non-empty, otherwise the trimmed
/// concatenation of last name then first name with no separator. The
/// repository calls this immediately before every write, so a stored name is
/// never empty while either part is set.
pub fn derive_name(name: Option<&str>, last_name: Option<&str>, first_name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => format!(
            "{}{}",
            last_name.unwrap_or_default(),
            first_name.unwrap_or_default()
        )
        .trim()
        .to_string(),
    }
}

/// Truncate a date string to its 10-character `YYYY-MM-DD` prefix.
///
/// Accepts both bare calendar dates and full ISO 8601 timestamps. Shorter
/// input passes through unmodified; no format validation is performed.
pub fn calendar_date(s: &str) -> &str {
    match s.char_indices().nth(10) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
