//! Schema Registry subsystem
//!
//! A record schema is the positional contract for one type tag: field `i` of
//! the schema decodes value `i` of a raw array.
//!
//! # Design Principles
//!
//! - Schemas are registered once at startup and read-only afterwards
//! - Field order is declared explicitly and never changes after registration
//! - Duplicate tags and empty schemas are fatal registration errors
//! - An unknown tag on lookup is a normal outcome

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use registry::SchemaRegistry;
pub use types::{FieldDef, FieldType, RecordSchema};
