//! Per-field type coercion
//!
//! Coercion rules, applied after null and `""` have been mapped to null:
//! - int: integral numbers as-is, finite floats truncate toward zero,
//!   trimmed numeric strings parse, booleans become 1/0
//! - float: numbers, trimmed numeric strings, booleans as 1.0/0.0
//! - bool: `true`/`false` as-is, zero is false and other numbers true,
//!   any non-empty string is true (including "0")
//! - string: strings as-is, numbers and booleans stringified, arrays and
//!   objects as compact JSON
//! - date: `YYYY-MM-DD`
//! - datetime: ISO-8601, trailing `Z` read as `+00:00`, no offset read as
//!   UTC, a bare date read as midnight UTC
//! - raw: passed through
//!
//! Arrays and objects fail every typed coercion except string and raw.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde_json::Value;

use super::errors::CoercionError;
use super::value::FieldValue;
use crate::schema::FieldType;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Coerces one raw value to a field type.
///
/// JSON null and the empty string always become `FieldValue::Null`.
pub fn coerce(field_type: FieldType, value: &Value) -> Result<FieldValue, CoercionError> {
    if is_blank(value) {
        return Ok(FieldValue::Null);
    }

    match field_type {
        FieldType::Int => coerce_int(value).map(FieldValue::Int),
        FieldType::Float => coerce_float(value).map(FieldValue::Float),
        FieldType::Bool => coerce_bool(value).map(FieldValue::Bool),
        FieldType::String => Ok(coerce_string(value)),
        FieldType::Date => coerce_date(value).map(FieldValue::Date),
        FieldType::DateTime => coerce_datetime(value).map(FieldValue::DateTime),
        FieldType::Raw => Ok(FieldValue::Raw(value.clone())),
    }
}

/// Null and the empty string carry no value.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn coerce_int(value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f.trunc() as i64)
                }
                _ => Err(mismatch("int", value)),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| mismatch("int", value)),
        Value::Bool(b) => Ok(i64::from(*b)),
        _ => Err(mismatch("int", value)),
    }
}

fn coerce_float(value: &Value) -> Result<f64, CoercionError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    // NaN and infinities have no JSON form
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| mismatch("float", value))
}

fn coerce_bool(value: &Value) -> Result<bool, CoercionError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().map_or(true, |f| f != 0.0)),
        Value::String(s) => Ok(!s.is_empty()),
        _ => Err(mismatch("bool", value)),
    }
}

fn coerce_string(value: &Value) -> FieldValue {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    };

    if text.is_empty() {
        FieldValue::Null
    } else {
        FieldValue::String(text)
    }
}

fn coerce_date(value: &Value) -> Result<NaiveDate, CoercionError> {
    let s = value.as_str().ok_or_else(|| mismatch("date", value))?;
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| mismatch("date", value))
}

fn coerce_datetime(value: &Value) -> Result<DateTime<FixedOffset>, CoercionError> {
    let s = value.as_str().ok_or_else(|| mismatch("datetime", value))?;
    parse_iso_datetime(s).ok_or_else(|| mismatch("datetime", value))
}

/// Parses an ISO-8601 timestamp.
pub fn parse_iso_datetime(input: &str) -> Option<DateTime<FixedOffset>> {
    let mut s = input.trim().to_string();

    if s.ends_with('Z') || s.ends_with('z') {
        s.truncate(s.len() - 1);
        s.push_str("+00:00");
    }

    // ISO-8601 allows a space between date and time
    if s.len() > 10 && s.is_char_boundary(10) && s.is_char_boundary(11) && &s[10..11] == " " {
        s.replace_range(10..11, "T");
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Some(dt);
    }

    if let Ok(dt) = DateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&s, format) {
            return Some(Utc.fix().from_utc_datetime(&naive));
        }
    }

    let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.fix().from_utc_datetime(&midnight))
}

/// Returns the JSON type name for messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, actual: &Value) -> CoercionError {
    let mut shown = actual.to_string();
    if shown.len() > 40 {
        let cut = (0..=40).rev().find(|i| shown.is_char_boundary(*i)).unwrap_or(0);
        shown.truncate(cut);
        shown.push_str("...");
    }
    CoercionError::new(expected, format!("{} {}", json_type_name(actual), shown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(field_type: FieldType, value: Value) -> FieldValue {
        coerce(field_type, &value).unwrap()
    }

    #[test]
    fn test_blank_is_null_for_every_type() {
        for field_type in [
            FieldType::Int,
            FieldType::Float,
            FieldType::Bool,
            FieldType::String,
            FieldType::Date,
            FieldType::DateTime,
            FieldType::Raw,
        ] {
            assert_eq!(ok(field_type, json!(null)), FieldValue::Null);
            assert_eq!(ok(field_type, json!("")), FieldValue::Null);
        }
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(ok(FieldType::Int, json!(25)), FieldValue::Int(25));
        assert_eq!(ok(FieldType::Int, json!("123")), FieldValue::Int(123));
        assert_eq!(ok(FieldType::Int, json!(" -7 ")), FieldValue::Int(-7));
        assert_eq!(ok(FieldType::Int, json!(2.9)), FieldValue::Int(2));
        assert_eq!(ok(FieldType::Int, json!(true)), FieldValue::Int(1));
        assert!(coerce(FieldType::Int, &json!("not_a_number")).is_err());
        assert!(coerce(FieldType::Int, &json!("12.5")).is_err());
        assert!(coerce(FieldType::Int, &json!([1])).is_err());
        assert!(coerce(FieldType::Int, &json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(ok(FieldType::Float, json!(2.5)), FieldValue::Float(2.5));
        assert_eq!(ok(FieldType::Float, json!(3)), FieldValue::Float(3.0));
        assert_eq!(ok(FieldType::Float, json!("45.99")), FieldValue::Float(45.99));
        assert_eq!(ok(FieldType::Float, json!(false)), FieldValue::Float(0.0));
        assert!(coerce(FieldType::Float, &json!("also_not_a_number")).is_err());
        assert!(coerce(FieldType::Float, &json!({"a": 1})).is_err());
    }

    #[test]
    fn test_float_rejects_non_finite() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", " Infinity "] {
            assert!(coerce(FieldType::Float, &json!(text)).is_err(), "{} accepted", text);
        }
    }

    #[test]
    fn test_bool_truth_table() {
        assert_eq!(ok(FieldType::Bool, json!(true)), FieldValue::Bool(true));
        assert_eq!(ok(FieldType::Bool, json!(false)), FieldValue::Bool(false));
        assert_eq!(ok(FieldType::Bool, json!(0)), FieldValue::Bool(false));
        assert_eq!(ok(FieldType::Bool, json!(0.0)), FieldValue::Bool(false));
        assert_eq!(ok(FieldType::Bool, json!(1)), FieldValue::Bool(true));
        assert_eq!(ok(FieldType::Bool, json!(-1)), FieldValue::Bool(true));
        assert_eq!(ok(FieldType::Bool, json!("1")), FieldValue::Bool(true));
        assert_eq!(ok(FieldType::Bool, json!("0")), FieldValue::Bool(true));
        assert_eq!(ok(FieldType::Bool, json!("no")), FieldValue::Bool(true));
        assert!(coerce(FieldType::Bool, &json!([])).is_err());
    }

    #[test]
    fn test_string_coercion() {
        assert_eq!(ok(FieldType::String, json!("Fruits")), FieldValue::String("Fruits".into()));
        assert_eq!(ok(FieldType::String, json!(456)), FieldValue::String("456".into()));
        assert_eq!(ok(FieldType::String, json!(0)), FieldValue::String("0".into()));
        assert_eq!(ok(FieldType::String, json!(true)), FieldValue::String("true".into()));
        assert_eq!(ok(FieldType::String, json!(["a", "b"])), FieldValue::String("[\"a\",\"b\"]".into()));
    }

    #[test]
    fn test_date_coercion() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(ok(FieldType::Date, json!("2024-01-15")), FieldValue::Date(expected));
        assert!(coerce(FieldType::Date, &json!("15.01.2024")).is_err());
        assert!(coerce(FieldType::Date, &json!("2024-01-15T10:00:00")).is_err());
        assert!(coerce(FieldType::Date, &json!(20240115)).is_err());
    }

    #[test]
    fn test_datetime_z_equals_utc_offset() {
        let with_z = ok(FieldType::DateTime, json!("2023-12-25T10:00:00Z"));
        let expected = DateTime::parse_from_rfc3339("2023-12-25T10:00:00+00:00").unwrap();
        assert_eq!(with_z, FieldValue::DateTime(expected));
    }

    #[test]
    fn test_datetime_variants() {
        let with_offset = parse_iso_datetime("2023-12-25T11:00:00+01:00").unwrap();
        let utc = parse_iso_datetime("2023-12-25T10:00:00Z").unwrap();
        assert_eq!(with_offset, utc);

        let spaced = parse_iso_datetime("2023-12-25 10:00:00").unwrap();
        assert_eq!(spaced, utc);

        let fractional = parse_iso_datetime("2023-12-25T10:00:00.250").unwrap();
        assert_eq!(fractional.timestamp_millis(), utc.timestamp_millis() + 250);

        let minutes = parse_iso_datetime("2023-12-25T10:00").unwrap();
        assert_eq!(minutes, utc);

        let midnight = parse_iso_datetime("2023-12-25").unwrap();
        assert_eq!(midnight, parse_iso_datetime("2023-12-25T00:00:00Z").unwrap());

        assert!(parse_iso_datetime("yesterday").is_none());
        assert!(coerce(FieldType::DateTime, &json!(1703498400)).is_err());
    }

    #[test]
    fn test_raw_passthrough() {
        let value = json!(["12345", "12346"]);
        assert_eq!(ok(FieldType::Raw, value.clone()), FieldValue::Raw(value));
        assert_eq!(ok(FieldType::Raw, json!(0)), FieldValue::Raw(json!(0)));
    }

    #[test]
    fn test_mismatch_message_truncated() {
        let long = "x".repeat(100);
        let err = coerce(FieldType::Int, &json!(long)).unwrap_err();
        assert_eq!(err.expected, "int");
        assert!(err.actual.starts_with("string "));
        assert!(err.actual.ends_with("..."));
    }
}
