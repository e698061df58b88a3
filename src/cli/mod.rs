//! CLI module for datalist
//!
//! Provides command-line interface for:
//! - decode: Decode an envelope into records
//! - schemas: List registered schemas

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{decode, decode_to_writer, run_command, schemas, schemas_to_writer};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_envelope, read_envelope, write_json};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
