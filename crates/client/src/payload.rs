//! Client-to-wire payload shaping.
//!
//! Outgoing payloads pass every field through unchanged except the
//! certificate flag, which the server expects as the string `"1"` or `"0"`.
//! An unset flag is omitted entirely; no default is ever sent.

use serde::{Serialize, Serializer};
use yoyaku_core::flag;
use yoyaku_core::reservation::{Program, Slot, Status};

/// Input for creating a reservation (`POST /reservations`).
#[derive(Debug, Clone, Serialize)]
pub struct CreateReservationInput {
    pub date: String,
    pub program: Program,
    pub slot: Slot,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_type: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "certificate_to_wire"
    )]
    pub has_certificate: Option<bool>,
}

/// Input for partially updating a reservation (`PATCH /reservations/{id}`).
/// Omitted fields are left unchanged by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReservationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_type: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "certificate_to_wire"
    )]
    pub has_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Serialize a set certificate flag as the wire string `"1"` or `"0"`.
///
/// Only called for `Some` values; unset flags are skipped at the field
/// level so the key never appears in the payload.
fn certificate_to_wire<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(b) => serializer.serialize_str(flag::encode(*b)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_input() -> CreateReservationInput {
        CreateReservationInput {
            date: "2025-09-03".to_string(),
            program: Program("tour".into()),
            slot: Slot("am".into()),
            name: "田中太郎".to_string(),
            last_name: None,
            first_name: None,
            email: None,
            phone: None,
            notebook_type: None,
            has_certificate: None,
        }
    }

    #[test]
    fn set_certificate_serializes_as_wire_string() {
        let mut input = create_input();
        input.has_certificate = Some(true);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["has_certificate"], json!("1"));

        input.has_certificate = Some(false);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["has_certificate"], json!("0"));
    }

    #[test]
    fn unset_certificate_is_omitted() {
        let value = serde_json::to_value(create_input()).unwrap();
        assert!(value.get("has_certificate").is_none());

        let value = serde_json::to_value(UpdateReservationInput::default()).unwrap();
        assert!(value.get("has_certificate").is_none());
        assert_eq!(value, json!({}));
    }

    #[test]
    fn other_fields_pass_through_unchanged() {
        let input = UpdateReservationInput {
            slot: Some(Slot("pm".into())),
            status: Some(Status("canceled".into())),
            note: Some("rained out".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({"slot": "pm", "status": "canceled", "note": "rained out"})
        );
    }

    #[test]
    fn certificate_round_trip_preserves_truth_value() {
        // Wire "1" -> normalized true -> shaped back to "1".
        let wire: crate::wire::WireReservation = serde_json::from_value(json!({
            "id": 1,
            "date": "2025-09-03",
            "program": "tour",
            "slot": "am",
            "has_certificate": "1"
        }))
        .unwrap();
        let normalized = crate::normalize::normalize(wire);
        assert!(normalized.has_certificate);

        let input = UpdateReservationInput {
            has_certificate: Some(normalized.has_certificate),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["has_certificate"], json!("1"));
    }
}
