//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one JSON document per line on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the envelope from a file, or from stdin when no path is given
pub fn read_envelope(input: Option<&Path>) -> CliResult<Value> {
    let content = match input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_envelope(&content)
}

/// Parse envelope text
pub fn parse_envelope(content: &str) -> CliResult<Value> {
    if content.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    serde_json::from_str(content).map_err(|e| CliError::invalid_input(format!("Invalid JSON: {}", e)))
}

/// Write a value as one line of JSON
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)
        .map_err(|e| CliError::io_error(format!("Failed to write JSON: {}", e)))?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
