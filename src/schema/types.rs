//! Record schema type definitions
//!
//! A record schema is an ordered list of field definitions. The position of a
//! field in that list is the index of its value in the raw positional array.
//!
//! Supported semantic types:
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - bool: Boolean
//! - string: UTF-8 string
//! - date: calendar date (`YYYY-MM-DD`)
//! - datetime: ISO-8601 timestamp with offset
//! - raw: any JSON value, passed through

use serde::{Deserialize, Serialize};

use crate::decoder::FieldValue;

/// Semantic type of a positional field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Boolean
    Bool,
    /// UTF-8 string
    String,
    /// Calendar date without time
    Date,
    /// Timestamp with UTC offset
    DateTime,
    /// Unconverted JSON value
    Raw,
}

impl FieldType {
    /// Returns the type name for messages and schema listings
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Raw => "raw",
        }
    }
}

/// One positional field of a record schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Semantic type used for coercion
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Value used when the raw array ends before this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
}

impl FieldDef {
    /// Create a field without a declared default
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
        }
    }

    /// Create a field with a declared default
    pub fn with_default(
        name: impl Into<String>,
        field_type: FieldType,
        default: FieldValue,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: Some(default),
        }
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Date)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    pub fn raw(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Raw)
    }

    /// Returns the value a missing trailing field takes
    pub fn missing_value(&self) -> FieldValue {
        self.default.clone().unwrap_or(FieldValue::Null)
    }
}

/// Ordered positional schema for one type tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Type tag as it appears in the envelope
    #[serde(rename = "type")]
    pub tag: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions in positional order
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Create a new schema
    pub fn new(tag: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            tag: tag.into(),
            description: None,
            fields,
        }
    }

    /// Number of positional fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the position of a field by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Validates the schema structure itself (not a record)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.tag.trim().is_empty() {
            return Err("Schema type tag must not be empty".into());
        }

        if self.fields.is_empty() {
            return Err(format!("Schema '{}' declares no fields", self.tag));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(format!("Field at position {} has an empty name", i));
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("Field '{}' is declared twice", field.name));
            }
        }

        Ok(())
    }
}
