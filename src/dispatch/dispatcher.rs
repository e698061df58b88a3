//! Batch dispatcher
//!
//! Walks an envelope in order. For each entry:
//! - unknown tag: the whole entry is skipped
//! - terminator sentinel: dropped, never decoded
//! - raw record that is not an array: only that record is skipped
//! - everything else: decoded and appended
//!
//! Output is the strict concatenation of every entry's records in envelope
//! order. The dispatcher keeps no state between calls.

use serde::Serialize;
use serde_json::Value;

use super::envelope::{envelope_entries, EnvelopeEntry};
use super::errors::Skip;
use super::sentinel::TerminatorSet;
use crate::config::DecoderConfig;
use crate::decoder::{json_type_name, DecodedRecord, RecordDecoder};
use crate::model::{Entity, EntityCatalog};
use crate::observability::{event_enabled, log_event_with_fields, Event};
use crate::schema::SchemaRegistry;

/// What a parse saw and skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Entries in the envelope
    pub entries: usize,
    /// Records decoded and returned
    pub records_decoded: usize,
    /// Terminator sentinels dropped
    pub terminators: usize,
    /// Entries whose declared `cnt` differs from their decoded count
    pub cnt_mismatches: usize,
    /// Everything skipped, in envelope order
    pub skipped: Vec<Skip>,
}

impl DispatchReport {
    /// Number of entries skipped for an unregistered tag
    pub fn unknown_tags(&self) -> usize {
        self.count(|s| matches!(s, Skip::SchemaNotFound { .. }))
    }

    /// Number of entries skipped as malformed
    pub fn malformed_entries(&self) -> usize {
        self.count(|s| matches!(s, Skip::MalformedEntry { .. }))
    }

    /// Number of raw records skipped as malformed
    pub fn malformed_records(&self) -> usize {
        self.count(|s| matches!(s, Skip::MalformedRecord { .. }))
    }

    /// True if the body was not an envelope at all
    pub fn envelope_malformed(&self) -> bool {
        self.skipped
            .iter()
            .any(|s| matches!(s, Skip::MalformedEnvelope { .. }))
    }

    /// True if nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn count(&self, pred: impl Fn(&Skip) -> bool) -> usize {
        self.skipped.iter().filter(|s| pred(s)).count()
    }
}

/// Decodes envelopes against a schema registry.
pub struct BatchDispatcher<'a> {
    registry: &'a SchemaRegistry,
    terminators: TerminatorSet,
    strict_envelope: bool,
}

impl<'a> BatchDispatcher<'a> {
    /// Creates a dispatcher with the default terminators `[0]` and `[-1]`.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            terminators: TerminatorSet::default(),
            strict_envelope: false,
        }
    }

    /// Creates a dispatcher configured from a decoder config.
    pub fn from_config(registry: &'a SchemaRegistry, config: &DecoderConfig) -> Self {
        Self::new(registry)
            .with_terminators(config.terminator_set())
            .with_strict_envelope(config.strict_envelope)
    }

    /// Replaces the terminator set.
    pub fn with_terminators(mut self, terminators: TerminatorSet) -> Self {
        self.terminators = terminators;
        self
    }

    /// When strict, a top-level object is not read as a one-entry envelope.
    pub fn with_strict_envelope(mut self, strict: bool) -> Self {
        self.strict_envelope = strict;
        self
    }

    pub fn registry(&self) -> &SchemaRegistry {
        self.registry
    }

    /// Decodes every record of an envelope, in envelope order.
    pub fn parse(&self, body: &Value) -> Vec<DecodedRecord> {
        self.parse_with_report(body).0
    }

    /// Decodes an envelope and reports what was skipped.
    pub fn parse_with_report(&self, body: &Value) -> (Vec<DecodedRecord>, DispatchReport) {
        let mut records = Vec::new();
        let mut report = DispatchReport::default();

        let Some(entries) = envelope_entries(body, self.strict_envelope) else {
            let actual = json_type_name(body);
            log_event_with_fields(Event::EnvelopeMalformed, &[("actual", actual)]);
            report.skipped.push(Skip::MalformedEnvelope { actual });
            return (records, report);
        };

        report.entries = entries.len();
        for (entry_index, raw_entry) in entries.iter().enumerate() {
            let entry = match EnvelopeEntry::from_value(raw_entry) {
                Ok(entry) => entry,
                Err(reason) => {
                    log_event_with_fields(
                        Event::EntryMalformed,
                        &[("entry", &entry_index.to_string()), ("reason", &reason)],
                    );
                    report.skipped.push(Skip::MalformedEntry {
                        entry: entry_index,
                        reason,
                    });
                    continue;
                }
            };

            self.parse_entry(entry_index, &entry, &mut records, &mut report);
        }

        report.records_decoded = records.len();
        (records, report)
    }

    fn parse_entry(
        &self,
        entry_index: usize,
        entry: &EnvelopeEntry<'_>,
        records: &mut Vec<DecodedRecord>,
        report: &mut DispatchReport,
    ) {
        let Some(schema) = self.registry.lookup(entry.tag) else {
            log_event_with_fields(
                Event::EntryUnknownTag,
                &[("entry", &entry_index.to_string()), ("tag", entry.tag)],
            );
            report.skipped.push(Skip::SchemaNotFound {
                entry: entry_index,
                tag: entry.tag.to_string(),
            });
            return;
        };

        let before = records.len();
        for (index, raw) in entry.data.iter().enumerate() {
            if self.terminators.is_terminator(raw) {
                report.terminators += 1;
                continue;
            }

            let Some(values) = raw.as_array() else {
                let actual = json_type_name(raw);
                log_event_with_fields(
                    Event::RecordMalformed,
                    &[
                        ("actual", actual),
                        ("entry", &entry_index.to_string()),
                        ("index", &index.to_string()),
                        ("tag", entry.tag),
                    ],
                );
                report.skipped.push(Skip::MalformedRecord {
                    entry: entry_index,
                    tag: entry.tag.to_string(),
                    index,
                    actual,
                });
                continue;
            };

            records.push(RecordDecoder::decode_values(schema, values).with_version(entry.version));
        }

        let decoded = records.len() - before;
        if let Some(cnt) = entry.cnt {
            if usize::try_from(cnt).map_or(true, |cnt| cnt != decoded) {
                report.cnt_mismatches += 1;
                if event_enabled(Event::CntMismatch) {
                    log_event_with_fields(
                        Event::CntMismatch,
                        &[
                            ("cnt", &cnt.to_string()),
                            ("decoded", &decoded.to_string()),
                            ("tag", entry.tag),
                        ],
                    );
                }
            }
        }
    }

    /// Decodes an envelope into typed entities, in envelope order.
    ///
    /// Tags registered without a compiled type come back as
    /// `Entity::Untyped`.
    pub fn parse_entities(&self, body: &Value) -> Vec<Entity> {
        let catalog = EntityCatalog::global();
        self.parse(body)
            .into_iter()
            .map(|record| catalog.build(record))
            .collect()
    }
}
