//! Wire-to-client normalization.

use serde::Serialize;
use yoyaku_core::flag;
use yoyaku_core::reservation::{calendar_date, Program, Slot, Status};
use yoyaku_core::types::DbId;

use crate::wire::WireReservation;

/// A reservation in the strict client-side representation.
///
/// Unlike [`WireReservation`], `has_certificate` is always a boolean, `date`
/// is always a bare `YYYY-MM-DD` string, `name` is always present, and
/// optional fields are an explicit `None` rather than missing. Whether an
/// absent wire field was never set or set to empty is not preserved; both
/// collapse to `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: Option<DbId>,
    pub date: String,
    pub program: Program,
    pub slot: Slot,
    pub name: String,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notebook_type: Option<String>,
    pub has_certificate: bool,
    pub status: Option<Status>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub contact: Option<String>,
    pub note: Option<String>,
    pub room: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Normalize a wire reservation into the strict client shape.
///
/// Total: malformed input degrades to defaults instead of failing.
/// The certificate flag is decoded through [`flag::decode`]; an unknown
/// outcome defaults to `false` at this layer.
pub fn normalize(wire: WireReservation) -> Reservation {
    let has_certificate = flag::decode(&wire.has_certificate).unwrap_or(false);

    Reservation {
        id: Some(wire.id),
        date: calendar_date(&wire.date).to_string(),
        program: wire.program,
        slot: wire.slot,
        name: wire.name.unwrap_or_default(),
        last_name: wire.last_name,
        first_name: wire.first_name,
        email: wire.email,
        phone: wire.phone,
        notebook_type: wire.notebook_type,
        has_certificate,
        status: wire.status,
        start_at: wire.start_at,
        end_at: wire.end_at,
        contact: wire.contact,
        note: wire.note,
        room: wire.room,
        created_at: wire.created_at,
        updated_at: wire.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn wire_from(value: serde_json::Value) -> WireReservation {
        serde_json::from_value(value).unwrap()
    }

    fn minimal() -> serde_json::Value {
        json!({"id": 1, "date": "2025-09-03", "program": "tour", "slot": "am"})
    }

    #[test]
    fn certificate_string_one_becomes_true() {
        let mut value = minimal();
        value["has_certificate"] = json!("1");
        let normalized = normalize(wire_from(value));
        assert!(normalized.has_certificate);
    }

    #[test]
    fn certificate_native_boolean_is_used_directly() {
        let mut value = minimal();
        value["has_certificate"] = json!(true);
        assert!(normalize(wire_from(value)).has_certificate);

        let mut value = minimal();
        value["has_certificate"] = json!(false);
        assert!(!normalize(wire_from(value)).has_certificate);
    }

    #[test]
    fn certificate_unknown_defaults_to_false() {
        for value in [json!("xyz"), serde_json::Value::Null] {
            let mut payload = minimal();
            payload["has_certificate"] = value;
            assert!(!normalize(wire_from(payload)).has_certificate);
        }
        // Absent key behaves like null.
        assert!(!normalize(wire_from(minimal())).has_certificate);
    }

    #[test]
    fn timestamp_date_is_truncated() {
        let mut value = minimal();
        value["date"] = json!("2025-09-03T10:00:00Z");
        assert_eq!(normalize(wire_from(value)).date, "2025-09-03");
    }

    #[test]
    fn absent_name_becomes_empty_string() {
        let normalized = normalize(wire_from(minimal()));
        assert_eq!(normalized.name, "");
    }

    #[test]
    fn absent_optionals_become_explicit_none() {
        let normalized = normalize(wire_from(minimal()));
        assert_eq!(normalized.last_name, None);
        assert_eq!(normalized.email, None);
        assert_eq!(normalized.room, None);
        assert_eq!(normalized.status, None);
    }

    #[test]
    fn populated_fields_pass_through() {
        let normalized = normalize(wire_from(json!({
            "id": 7,
            "date": "2025-09-03",
            "program": "experience",
            "slot": "pm",
            "name": "田中太郎",
            "status": "pending",
            "phone": "090-0000-0000"
        })));

        assert_eq!(normalized.id, Some(7));
        assert_eq!(normalized.program, Program("experience".into()));
        assert_eq!(normalized.slot, Slot("pm".into()));
        assert_eq!(normalized.name, "田中太郎");
        assert_eq!(normalized.status, Some(Status("pending".into())));
        assert_eq!(normalized.phone.as_deref(), Some("090-0000-0000"));
    }
}
