//! Certificate-flag coercion.
//!
//! The `has_certificate` column is stored as the string `"0"` or `"1"`, but
//! over the wire the value shows up as a native boolean, `"0"`/`"1"`,
//! `"true"`/`"false"`, a bare number, or not at all. [`decode`] folds all of
//! those into a three-way outcome; each caller decides what "unknown" means
//! for it rather than inheriting a default from here.

use serde_json::Value;

/// Canonical stored form for a set certificate flag.
pub const STORED_TRUE: &str = "1";

/// Canonical stored form for an unset certificate flag.
pub const STORED_FALSE: &str = "0";

/// Strings accepted as true (matched after trim + lowercase).
pub const TRUTHY: &[&str] = &["1", "true", "yes", "y"];

/// Strings accepted as false (matched after trim + lowercase).
pub const FALSY: &[&str] = &["0", "false", "no", "n"];

/// Decode an arbitrary JSON value into a boolean, `None` meaning unknown.
///
/// - Native booleans pass through unchanged.
/// - `null` is unknown, not false.
/// - Strings and numbers are stringified, trimmed, lowercased, and matched
///   against [`TRUTHY`] / [`FALSY`]; anything unmatched is unknown.
/// - Arrays and objects are unknown (their text form never matches either
///   set).
///
/// Total: never fails, no side effects.
pub fn decode(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Null => None,
        Value::String(s) => match_text(s),
        Value::Number(n) => match_text(&n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Encode a strict boolean into the canonical stored form.
pub fn encode(value: bool) -> &'static str {
    if value {
        STORED_TRUE
    } else {
        STORED_FALSE
    }
}

/// Coerce an arbitrary input into the stored `"0"`/`"1"` form.
///
/// Unrecognized input (including `null`) silently collapses to `"0"`.
/// Callers that need to tell "absent" from "garbage" must use [`decode`]
/// before reaching this point.
pub fn coerce_stored(value: &Value) -> &'static str {
    encode(decode(value).unwrap_or(false))
}

fn match_text(s: &str) -> Option<bool> {
    let s = s.trim().to_lowercase();
    if TRUTHY.contains(&s.as_str()) {
        Some(true)
    } else if FALSY.contains(&s.as_str()) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn native_booleans_pass_through() {
        assert_eq!(decode(&json!(true)), Some(true));
        assert_eq!(decode(&json!(false)), Some(false));
    }

    #[test]
    fn null_is_unknown() {
        assert_eq!(decode(&Value::Null), None);
    }

    #[test]
    fn truthy_strings() {
        for s in ["1", "true", "yes", "y", "TRUE", "Yes", " y "] {
            assert_eq!(decode(&json!(s)), Some(true), "input: {s:?}");
        }
    }

    #[test]
    fn falsy_strings() {
        for s in ["0", "false", "no", "n", "FALSE", "No", " n "] {
            assert_eq!(decode(&json!(s)), Some(false), "input: {s:?}");
        }
    }

    #[test]
    fn unmatched_strings_are_unknown() {
        for s in ["xyz", "", "2", "on", "off"] {
            assert_eq!(decode(&json!(s)), None, "input: {s:?}");
        }
    }

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(decode(&json!(1)), Some(true));
        assert_eq!(decode(&json!(0)), Some(false));
        assert_eq!(decode(&json!(2)), None);
    }

    #[test]
    fn containers_are_unknown() {
        assert_eq!(decode(&json!([1])), None);
        assert_eq!(decode(&json!({"v": 1})), None);
    }

    #[test]
    fn encode_matches_stored_literals() {
        assert_eq!(encode(true), "1");
        assert_eq!(encode(false), "0");
    }

    #[test]
    fn coerce_stored_collapses_unknown_to_false() {
        assert_eq!(coerce_stored(&json!("yes")), "1");
        assert_eq!(coerce_stored(&json!("no")), "0");
        assert_eq!(coerce_stored(&json!("garbage")), "0");
        assert_eq!(coerce_stored(&Value::Null), "0");
    }
}
