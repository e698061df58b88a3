//! Reasons a part of an envelope was skipped
//!
//! None of these abort a parse. They are collected in the dispatch report
//! and logged.

use serde::Serialize;
use thiserror::Error;

/// A skipped envelope, entry or raw record
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Skip {
    #[error("Envelope is not an array of entries (got {actual})")]
    MalformedEnvelope { actual: &'static str },

    #[error("Entry {entry}: no schema registered for type '{tag}'")]
    SchemaNotFound { entry: usize, tag: String },

    #[error("Entry {entry}: {reason}")]
    MalformedEntry { entry: usize, reason: String },

    #[error("Entry {entry} ('{tag}'), record {index}: not an array (got {actual})")]
    MalformedRecord {
        entry: usize,
        tag: String,
        index: usize,
        actual: &'static str,
    },
}
