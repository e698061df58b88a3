//! Record Decoder subsystem
//!
//! Turns one raw positional array into one named, typed record.
//!
//! # Design Principles
//!
//! - Position `i` always maps to schema field `i`
//! - Short arrays take declared defaults or null
//! - Long arrays are truncated to the schema
//! - A failed coercion nulls only its own field
//! - Decoding is pure and never fails on data shape

mod coerce;
mod decoder;
mod errors;
mod value;

pub use coerce::{coerce, parse_iso_datetime};
pub use decoder::RecordDecoder;
pub use errors::{CoercionError, DecodeError, DecodeResult};
pub use value::{DecodedRecord, FieldValue};

pub(crate) use coerce::json_type_name;
