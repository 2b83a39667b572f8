//! Wire-format types: the reservation JSON as the server actually sends it.

use serde::Deserialize;
use serde_json::Value;
use yoyaku_core::reservation::{Program, Slot, Status};
use yoyaku_core::types::DbId;

/// A reservation as received over the wire, before normalization.
///
/// Tolerant by construction: `has_certificate` is kept as a raw JSON value
/// (`Null` when the key is absent) and `date` as a raw string, so decoding
/// never fails on the encodings different server versions produce.
#[derive(Debug, Clone, Deserialize)]
pub struct WireReservation {
    pub id: DbId,
    /// Bare `YYYY-MM-DD` or a full ISO 8601 timestamp.
    pub date: String,
    pub program: Program,
    pub slot: Slot,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notebook_type: Option<String>,
    /// Native boolean, `"0"`/`"1"`, `"true"`/`"false"`, or absent.
    #[serde(default)]
    pub has_certificate: Value,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub start_at: Option<String>,
    #[serde(default)]
    pub end_at: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Pagination envelope for list responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: Option<i64>,
    #[serde(default)]
    pub last_page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_payload() {
        let wire: WireReservation = serde_json::from_value(json!({
            "id": 1,
            "date": "2025-09-03",
            "program": "tour",
            "slot": "am"
        }))
        .unwrap();

        assert_eq!(wire.id, 1);
        assert!(wire.name.is_none());
        assert_eq!(wire.has_certificate, Value::Null);
    }

    #[test]
    fn decodes_heterogeneous_certificate_encodings() {
        for value in [json!(true), json!("1"), json!("false"), Value::Null] {
            let wire: WireReservation = serde_json::from_value(json!({
                "id": 1,
                "date": "2025-09-03",
                "program": "tour",
                "slot": "am",
                "has_certificate": value
            }))
            .unwrap();
            assert_eq!(wire.has_certificate, value);
        }
    }

    #[test]
    fn decodes_envelope_with_optional_counters() {
        let page: Paginated<WireReservation> = serde_json::from_value(json!({
            "data": [{"id": 1, "date": "2025-09-03", "program": "tour", "slot": "am"}]
        }))
        .unwrap();

        assert_eq!(page.data.len(), 1);
        assert!(page.total.is_none());
    }
}
