//! CLI argument definitions using clap
//!
//! Commands:
//! - datalist decode [--config <path>] [--input <path>] [--typed]
//! - datalist schemas [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// datalist - decode positional DataList envelopes into named records
#[derive(Parser, Debug)]
#[command(name = "datalist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode an envelope and print its records as JSON
    Decode {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Envelope file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print compiled entity types instead of generic records
        #[arg(long)]
        typed: bool,
    },

    /// List registered record schemas
    Schemas {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode() {
        let cli = Cli::try_parse_from(["datalist", "decode", "--input", "body.json", "--typed"])
            .unwrap();
        match cli.command {
            Command::Decode {
                config,
                input,
                typed,
            } => {
                assert!(config.is_none());
                assert_eq!(input, Some(PathBuf::from("body.json")));
                assert!(typed);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_schemas() {
        let cli = Cli::try_parse_from(["datalist", "schemas", "--config", "d.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Schemas { config: Some(ref p) } if p == &PathBuf::from("d.json")
        ));
    }
}
