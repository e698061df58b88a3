//! Observable decoding events
//!
//! Events are explicit and typed. Each event carries the severity it is
//! logged at.

use std::fmt;

use super::logger::Severity;

/// Observable events of the registry and the decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Decoder configuration loaded
    ConfigLoaded,

    // Registry
    /// Builtin registry constructed
    RegistryBuilt,
    /// One schema registered
    SchemaRegistered,
    /// Extra schemas loaded from a directory
    SchemaDirLoaded,

    // Dispatch
    /// Top-level body is not an envelope
    EnvelopeMalformed,
    /// Entry skipped because its tag is not registered
    EntryUnknownTag,
    /// Entry is not an object or has no type tag
    EntryMalformed,
    /// Raw record is not an array
    RecordMalformed,
    /// Declared `cnt` differs from the decoded record count
    CntMismatch,

    // Record decoding
    /// One field could not be coerced and was nulled
    FieldCoercionFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RegistryBuilt => "REGISTRY_BUILT",
            Event::SchemaRegistered => "SCHEMA_REGISTERED",
            Event::SchemaDirLoaded => "SCHEMA_DIR_LOADED",
            Event::EnvelopeMalformed => "ENVELOPE_MALFORMED",
            Event::EntryUnknownTag => "ENTRY_UNKNOWN_TAG",
            Event::EntryMalformed => "ENTRY_MALFORMED",
            Event::RecordMalformed => "RECORD_MALFORMED",
            Event::CntMismatch => "CNT_MISMATCH",
            Event::FieldCoercionFailed => "FIELD_COERCION_FAILED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded
            | Event::RegistryBuilt
            | Event::SchemaDirLoaded
            | Event::EntryUnknownTag => Severity::Info,
            Event::EnvelopeMalformed | Event::EntryMalformed | Event::RecordMalformed => {
                Severity::Warn
            }
            Event::SchemaRegistered | Event::CntMismatch | Event::FieldCoercionFailed => {
                Severity::Trace
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
