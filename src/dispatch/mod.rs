//! Batch Dispatcher subsystem
//!
//! Walks a type-multiplexed envelope and decodes each batch with the schema
//! registered for its tag.
//!
//! # Design Principles
//!
//! - Output keeps envelope order, then batch order
//! - Unknown tags skip their entry, never the envelope
//! - Terminator sentinels are never decoded
//! - A malformed record skips only itself
//! - Nothing is kept between calls

mod dispatcher;
mod envelope;
mod errors;
mod sentinel;

pub use dispatcher::{BatchDispatcher, DispatchReport};
pub use envelope::{envelope_entries, EnvelopeEntry};
pub use errors::Skip;
pub use sentinel::{TerminatorSet, DEFAULT_TERMINATORS};
