//! Record decoder errors
//!
//! `CoercionError` never leaves the decoder: a failed field is nulled.
//! `DecodeError` is a caller contract violation, not a data problem.

use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Caller contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Schema '{0}' declares no fields")]
    EmptySchema(String),

    #[error("Raw record for '{tag}' is not an array (got {actual})")]
    NotAnArray { tag: String, actual: &'static str },
}

/// A single raw value that does not fit its declared field type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {actual}")]
pub struct CoercionError {
    /// Declared field type name
    pub expected: &'static str,
    /// Short description of the raw value
    pub actual: String,
}

impl CoercionError {
    pub(crate) fn new(expected: &'static str, actual: impl Into<String>) -> Self {
        Self {
            expected,
            actual: actual.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::NotAnArray {
            tag: "Group".into(),
            actual: "string",
        };
        assert_eq!(format!("{}", err), "Raw record for 'Group' is not an array (got string)");
    }

    #[test]
    fn test_coercion_error_display() {
        let err = CoercionError::new("int", "string \"abc\"");
        assert_eq!(format!("{}", err), "expected int, got string \"abc\"");
    }
}
