//! Schema registry error types
//!
//! Error codes:
//! - DATALIST_SCHEMA_CONFLICT (FATAL)
//! - DATALIST_INVALID_SCHEMA (FATAL)
//! - DATALIST_MALFORMED_SCHEMA_FILE (FATAL)
//!
//! Registry errors only occur while schemas are being registered, which
//! happens once at startup. Decoding never produces a `SchemaError`.

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Startup must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// A tag was registered twice
    DatalistSchemaConflict,
    /// Schema structure is unusable (no fields, empty tag, duplicate field)
    DatalistInvalidSchema,
    /// Schema file could not be read or parsed
    DatalistMalformedSchemaFile,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::DatalistSchemaConflict => "DATALIST_SCHEMA_CONFLICT",
            SchemaErrorCode::DatalistInvalidSchema => "DATALIST_INVALID_SCHEMA",
            SchemaErrorCode::DatalistMalformedSchemaFile => "DATALIST_MALFORMED_SCHEMA_FILE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Type tag if applicable
    tag: Option<String>,
}

impl SchemaError {
    /// Create a registration conflict error
    pub fn conflict(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            code: SchemaErrorCode::DatalistSchemaConflict,
            message: format!("Schema for type '{}' is already registered", tag),
            tag: Some(tag),
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            code: SchemaErrorCode::DatalistInvalidSchema,
            message: format!("Invalid schema for type '{}': {}", tag, reason.into()),
            tag: Some(tag),
        }
    }

    /// Create an error for a malformed schema file
    pub fn malformed_file(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::DatalistMalformedSchemaFile,
            message: format!("Malformed schema file '{}': {}", path.into(), reason.into()),
            tag: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the type tag if applicable
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Registry errors always abort startup
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::DatalistSchemaConflict.code(), "DATALIST_SCHEMA_CONFLICT");
        assert_eq!(SchemaErrorCode::DatalistInvalidSchema.code(), "DATALIST_INVALID_SCHEMA");
        assert_eq!(
            SchemaErrorCode::DatalistMalformedSchemaFile.code(),
            "DATALIST_MALFORMED_SCHEMA_FILE"
        );
    }

    #[test]
    fn test_all_registry_errors_fatal() {
        assert!(SchemaError::conflict("Group").is_fatal());
        assert!(SchemaError::invalid_schema("Group", "no fields").is_fatal());
        assert!(SchemaError::malformed_file("x.json", "bad").is_fatal());
    }

    #[test]
    fn test_conflict_display() {
        let err = SchemaError::conflict("Group");
        let display = format!("{}", err);
        assert!(display.contains("FATAL"));
        assert!(display.contains("DATALIST_SCHEMA_CONFLICT"));
        assert!(display.contains("Group"));
        assert_eq!(err.tag(), Some("Group"));
    }

    #[test]
    fn test_malformed_file_has_no_tag() {
        let err = SchemaError::malformed_file("schemas/x.json", "Invalid JSON");
        assert!(err.tag().is_none());
        assert!(err.message().contains("schemas/x.json"));
    }
}
