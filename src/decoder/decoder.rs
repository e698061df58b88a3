//! Positional record decoder
//!
//! For field index `i` of the schema:
//! - past the end of the raw array: the declared default, or null
//! - null or `""`: null
//! - otherwise: coerced to the field type, null if coercion fails
//!
//! Raw values past the end of the schema are ignored. Decoding never fails
//! for data-shape reasons and is pure: equal inputs give equal records.

use serde_json::Value;

use super::coerce::{coerce, json_type_name};
use super::errors::{DecodeError, DecodeResult};
use super::value::{DecodedRecord, FieldValue};
use crate::observability::{event_enabled, log_event_with_fields, Event};
use crate::schema::RecordSchema;

/// Decodes raw positional arrays against a record schema.
pub struct RecordDecoder;

impl RecordDecoder {
    /// Decodes one raw record.
    ///
    /// # Errors
    ///
    /// Only for caller contract violations:
    /// - the schema declares no fields
    /// - `raw` is not a JSON array
    pub fn decode(schema: &RecordSchema, raw: &Value) -> DecodeResult<DecodedRecord> {
        if schema.is_empty() {
            return Err(DecodeError::EmptySchema(schema.tag.clone()));
        }

        let values = raw.as_array().ok_or_else(|| DecodeError::NotAnArray {
            tag: schema.tag.clone(),
            actual: json_type_name(raw),
        })?;

        Ok(Self::decode_values(schema, values))
    }

    /// Decodes an already unpacked raw array.
    pub fn decode_values(schema: &RecordSchema, values: &[Value]) -> DecodedRecord {
        let fields = schema
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let value = match values.get(i) {
                    None => field.missing_value(),
                    Some(raw) => match coerce(field.field_type, raw) {
                        Ok(value) => value,
                        Err(e) => {
                            if event_enabled(Event::FieldCoercionFailed) {
                                log_event_with_fields(
                                    Event::FieldCoercionFailed,
                                    &[
                                        ("field", &field.name),
                                        ("position", &i.to_string()),
                                        ("reason", &e.to_string()),
                                        ("tag", &schema.tag),
                                    ],
                                );
                            }
                            FieldValue::Null
                        }
                    },
                };
                (field.name.clone(), value)
            })
            .collect();

        DecodedRecord::new(schema.tag.clone(), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldType};
    use serde_json::json;

    fn group_schema() -> RecordSchema {
        RecordSchema::new(
            "Group",
            vec![
                FieldDef::int("id"),
                FieldDef::string("name"),
                FieldDef::string("infotext"),
                FieldDef::int("count"),
            ],
        )
    }

    #[test]
    fn test_full_record() {
        let record =
            RecordDecoder::decode(&group_schema(), &json!([1, "Fruits", "Fresh fruits", 25])).unwrap();

        assert_eq!(record.tag(), "Group");
        assert_eq!(record.get_i64("id"), Some(1));
        assert_eq!(record.get_str("name"), Some("Fruits"));
        assert_eq!(record.get_str("infotext"), Some("Fresh fruits"));
        assert_eq!(record.get_i64("count"), Some(25));
    }

    #[test]
    fn test_short_record_fills_null() {
        let record = RecordDecoder::decode(&group_schema(), &json!([2, "Vegetables"])).unwrap();

        assert_eq!(record.get_i64("id"), Some(2));
        assert_eq!(record.get_str("name"), Some("Vegetables"));
        assert_eq!(record.get("infotext"), Some(&FieldValue::Null));
        assert_eq!(record.get("count"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_short_record_uses_declared_default() {
        let schema = RecordSchema::new(
            "Rubric",
            vec![
                FieldDef::int("id"),
                FieldDef::with_default("count", FieldType::Int, FieldValue::Int(0)),
            ],
        );

        let record = RecordDecoder::decode(&schema, &json!([7])).unwrap();
        assert_eq!(record.get_i64("count"), Some(0));

        // An explicit null inside the array is null, not the default
        let record = RecordDecoder::decode(&schema, &json!([7, null])).unwrap();
        assert_eq!(record.get("count"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_long_record_ignores_surplus() {
        let record = RecordDecoder::decode(
            &group_schema(),
            &json!([1, "Fruits", "Fresh fruits", 25, "surplus", {"x": 1}]),
        )
        .unwrap();

        assert_eq!(record.len(), 4);
        assert_eq!(record.get_i64("count"), Some(25));
    }

    #[test]
    fn test_coercion_failure_nulls_one_field() {
        let record =
            RecordDecoder::decode(&group_schema(), &json!(["abc", "Fruits", "Fresh fruits", "25"])).unwrap();

        assert_eq!(record.get("id"), Some(&FieldValue::Null));
        assert_eq!(record.get_str("name"), Some("Fruits"));
        assert_eq!(record.get_i64("count"), Some(25));
    }

    #[test]
    fn test_every_prefix_length_decodes() {
        let full = [json!(1), json!("Fruits"), json!("Fresh fruits"), json!(25)];
        for len in 0..=full.len() {
            let record = RecordDecoder::decode_values(&group_schema(), &full[..len]);
            assert_eq!(record.len(), 4);
            for i in len..4 {
                assert_eq!(record.value_at(i), Some(&FieldValue::Null));
            }
        }
    }

    #[test]
    fn test_decode_is_pure() {
        let schema = group_schema();
        let raw = json!([3, 4.5, null, "x"]);
        let first = RecordDecoder::decode(&schema, &raw).unwrap();
        for _ in 0..50 {
            assert_eq!(RecordDecoder::decode(&schema, &raw).unwrap(), first);
        }
    }

    #[test]
    fn test_not_an_array_is_contract_error() {
        let err = RecordDecoder::decode(&group_schema(), &json!("malformed")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NotAnArray {
                tag: "Group".into(),
                actual: "string"
            }
        );
    }

    #[test]
    fn test_empty_schema_is_contract_error() {
        let schema = RecordSchema::new("Nothing", vec![]);
        let err = RecordDecoder::decode(&schema, &json!([1])).unwrap_err();
        assert_eq!(err, DecodeError::EmptySchema("Nothing".into()));
    }

    #[test]
    fn test_empty_array_gives_all_defaults() {
        let record = RecordDecoder::decode(&group_schema(), &json!([])).unwrap();
        assert!(record.fields().all(|(_, v)| v.is_null()));
    }
}
