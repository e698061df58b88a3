//! datalist - positional DataList decoding
//!
//! Shop backends answer with type-multiplexed envelopes whose records are
//! bare positional arrays. This crate turns them into named, typed records:
//!
//! - `schema`: ordered field tables keyed by type tag
//! - `decoder`: one raw array to one record, never failing on data shape
//! - `dispatch`: a whole envelope to an ordered record list
//! - `model`: compiled record types for every known tag

pub mod cli;
pub mod config;
pub mod decoder;
pub mod dispatch;
pub mod model;
pub mod observability;
pub mod schema;

pub use config::{ConfigError, DecoderConfig};
pub use decoder::{DecodeError, DecodedRecord, FieldValue, RecordDecoder};
pub use dispatch::{BatchDispatcher, DispatchReport, Skip, TerminatorSet};
pub use model::{DataListRecord, Entity, EntityCatalog};
pub use schema::{FieldDef, FieldType, RecordSchema, SchemaError, SchemaRegistry};
