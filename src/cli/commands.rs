//! CLI command implementations
//!
//! Each command loads the configuration (or the defaults), builds the
//! registry, then does its work. Decoded output goes to stdout, the
//! dispatch report to stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::DecoderConfig;
use crate::dispatch::{BatchDispatcher, DispatchReport};
use crate::model::EntityCatalog;
use crate::schema::SchemaRegistry;

use super::args::Command;
use super::errors::CliResult;
use super::io::{read_envelope, write_json};

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Decode {
            config,
            input,
            typed,
        } => decode(config, input, typed),
        Command::Schemas { config } => schemas(config),
    }
}

/// Load the config file, or the defaults when no path is given
fn load_config(path: Option<&Path>) -> CliResult<DecoderConfig> {
    let config = match path {
        Some(path) => DecoderConfig::load(path)?,
        None => DecoderConfig::default(),
    };
    config.apply_logging()?;
    Ok(config)
}

/// Decode an envelope from a file or stdin.
pub fn decode(config: Option<PathBuf>, input: Option<PathBuf>, typed: bool) -> CliResult<()> {
    let config = load_config(config.as_deref())?;
    let registry = config.build_registry()?;
    let body = read_envelope(input.as_deref())?;

    let report = decode_to_writer(&config, &registry, &body, typed, &mut io::stdout().lock())?;
    write_json(&mut io::stderr().lock(), &json!({ "report": report }))
}

/// Decode `body` and write the records as one JSON array.
pub fn decode_to_writer<W: Write>(
    config: &DecoderConfig,
    registry: &SchemaRegistry,
    body: &Value,
    typed: bool,
    out: &mut W,
) -> CliResult<DispatchReport> {
    let dispatcher = BatchDispatcher::from_config(registry, config);
    let (records, report) = dispatcher.parse_with_report(body);

    if typed {
        let catalog = EntityCatalog::global();
        let entities: Vec<_> = records.into_iter().map(|r| catalog.build(r)).collect();
        write_json(out, &entities)?;
    } else {
        write_json(out, &records)?;
    }

    Ok(report)
}

/// List registered schemas.
pub fn schemas(config: Option<PathBuf>) -> CliResult<()> {
    let config = load_config(config.as_deref())?;
    let registry = config.build_registry()?;
    schemas_to_writer(&registry, &mut io::stdout().lock())
}

#[derive(Serialize)]
struct SchemaListing<'a> {
    #[serde(rename = "type")]
    tag: &'a str,
    fields: Vec<FieldListing<'a>>,
}

#[derive(Serialize)]
struct FieldListing<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    field_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

/// Write every registered schema, sorted by tag, as one JSON array.
pub fn schemas_to_writer<W: Write>(registry: &SchemaRegistry, out: &mut W) -> CliResult<()> {
    let listing: Vec<SchemaListing<'_>> = registry
        .tags()
        .into_iter()
        .filter_map(|tag| registry.lookup(tag))
        .map(|schema| SchemaListing {
            tag: &schema.tag,
            fields: schema
                .fields
                .iter()
                .map(|field| FieldListing {
                    name: &field.name,
                    field_type: field.field_type.type_name(),
                    default: field.default.as_ref().map(|d| d.to_json()),
                })
                .collect(),
        })
        .collect();

    write_json(out, &listing)
}
