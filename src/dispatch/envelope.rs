//! Envelope structure
//!
//! An envelope is a JSON array of entries:
//!
//! ```text
//! [ { "type": "Group", "version": 2, "cnt": 1, "data": [ [1, "Fruits"], [0] ] }, ... ]
//! ```
//!
//! `version` and `cnt` are optional. A missing `data` is an empty batch.

use serde_json::Value;

use crate::decoder::json_type_name;

/// Borrowed view of one envelope entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeEntry<'a> {
    /// Type tag
    pub tag: &'a str,
    /// Declared record version
    pub version: Option<i64>,
    /// Declared record count
    pub cnt: Option<i64>,
    /// Raw records, in batch order
    pub data: &'a [Value],
}

impl<'a> EnvelopeEntry<'a> {
    /// Reads an entry, reporting why it is unusable otherwise.
    pub fn from_value(value: &'a Value) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| format!("entry is not an object (got {})", json_type_name(value)))?;

        let tag = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| "entry has no string 'type'".to_string())?;

        let data = match obj.get("data") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                return Err(format!(
                    "'data' of '{}' is not an array (got {})",
                    tag,
                    json_type_name(other)
                ))
            }
        };

        Ok(Self {
            tag,
            version: obj.get("version").and_then(lenient_int),
            cnt: obj.get("cnt").and_then(lenient_int),
            data,
        })
    }
}

/// Integer metadata may arrive as a number or a numeric string.
fn lenient_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Returns the entries of a response body.
///
/// A top-level array is an envelope. Unless `strict` is set, a top-level
/// object with a `type` key is read as a one-entry envelope. Anything else
/// is malformed.
pub fn envelope_entries(body: &Value, strict: bool) -> Option<&[Value]> {
    match body {
        Value::Array(entries) => Some(entries.as_slice()),
        Value::Object(obj) if !strict && obj.contains_key("type") => {
            Some(std::slice::from_ref(body))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_entry() {
        let value = json!({"type": "Group", "version": 1, "cnt": 2, "data": [[1], [2]]});
        let entry = EnvelopeEntry::from_value(&value).unwrap();
        assert_eq!(entry.tag, "Group");
        assert_eq!(entry.version, Some(1));
        assert_eq!(entry.cnt, Some(2));
        assert_eq!(entry.data.len(), 2);
    }

    #[test]
    fn test_missing_data_is_empty_batch() {
        let value = json!({"type": "Group"});
        let entry = EnvelopeEntry::from_value(&value).unwrap();
        assert!(entry.data.is_empty());
        assert_eq!(entry.version, None);
    }

    #[test]
    fn test_string_metadata() {
        let value = json!({"type": "Item", "version": "20", "cnt": "x", "data": []});
        let entry = EnvelopeEntry::from_value(&value).unwrap();
        assert_eq!(entry.version, Some(20));
        assert_eq!(entry.cnt, None);
    }

    #[test]
    fn test_malformed_entries() {
        assert!(EnvelopeEntry::from_value(&json!("not_a_dict")).is_err());
        assert!(EnvelopeEntry::from_value(&json!({"no_type_field": true})).is_err());
        assert!(EnvelopeEntry::from_value(&json!({"type": 5})).is_err());
        assert!(EnvelopeEntry::from_value(&json!({"type": "Group", "data": "x"})).is_err());
    }

    #[test]
    fn test_envelope_shapes() {
        let array = json!([{"type": "Group"}]);
        assert_eq!(envelope_entries(&array, true).unwrap().len(), 1);

        let single = json!({"type": "Order", "data": [[1]]});
        assert_eq!(envelope_entries(&single, false).unwrap().len(), 1);
        assert!(envelope_entries(&single, true).is_none());

        assert!(envelope_entries(&json!({"error": "denied"}), false).is_none());
        assert!(envelope_entries(&json!("body"), false).is_none());
        assert!(envelope_entries(&json!(null), false).is_none());
    }
}
