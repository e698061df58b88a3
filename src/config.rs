//! Decoder configuration
//!
//! Loaded from a JSON file. Every key is optional; an empty `{}` file is the
//! default configuration.
//!
//! ```text
//! {
//!     "terminators": [0, -1],
//!     "schema_dir": "./schemas",
//!     "log_level": "WARN",
//!     "strict_envelope": false
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dispatch::TerminatorSet;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::schema::{SchemaError, SchemaRegistry};

/// Configuration errors. All are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid log_level '{0}'. Expected TRACE, INFO, WARN, ERROR or FATAL")]
    InvalidLogLevel(String),

    #[error("schema_dir must not be empty")]
    EmptySchemaDir,

    #[error("schema_dir '{0}' is not a directory")]
    SchemaDirMissing(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Decoder configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderConfig {
    /// Values marking a one-element raw array as a batch terminator
    #[serde(default = "default_terminators")]
    pub terminators: Vec<i64>,

    /// Directory of extra schema files, one `*.json` per tag
    #[serde(default)]
    pub schema_dir: Option<String>,

    /// Minimum log severity
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Reject a top-level object instead of reading it as a one-entry envelope
    #[serde(default)]
    pub strict_envelope: bool,
}

fn default_terminators() -> Vec<i64> {
    crate::dispatch::DEFAULT_TERMINATORS.to_vec()
}

fn default_log_level() -> String {
    "WARN".to_string()
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            schema_dir: None,
            log_level: default_log_level(),
            strict_envelope: false,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json_str(&content)?;

        log_event_with_fields(
            Event::ConfigLoaded,
            &[("path", &path.display().to_string())],
        );
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: DecoderConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.severity()?;

        if let Some(dir) = &self.schema_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::EmptySchemaDir);
            }
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn terminator_set(&self) -> TerminatorSet {
        TerminatorSet::new(self.terminators.iter().copied())
    }

    /// Sets the process-wide log level.
    pub fn apply_logging(&self) -> ConfigResult<()> {
        Logger::set_min_severity(self.severity()?);
        Ok(())
    }

    /// Builds the registry: every compiled type, plus `schema_dir` if set.
    pub fn build_registry(&self) -> ConfigResult<SchemaRegistry> {
        let mut registry = SchemaRegistry::builtin()?;

        if let Some(dir) = &self.schema_dir {
            let path = Path::new(dir);
            if !path.is_dir() {
                return Err(ConfigError::SchemaDirMissing(dir.clone()));
            }
            registry.load_dir(path)?;
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_is_default() {
        let config = DecoderConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
        assert_eq!(config.terminators, vec![0, -1]);
        assert_eq!(config.severity().unwrap(), Severity::Warn);
        assert!(!config.strict_envelope);
    }

    #[test]
    fn test_full_config() {
        let config = DecoderConfig::from_json_str(
            r#"{"terminators": [0], "log_level": "trace", "strict_envelope": true}"#,
        )
        .unwrap();

        assert_eq!(config.terminator_set().values(), &[0]);
        assert_eq!(config.severity().unwrap(), Severity::Trace);
        assert!(config.strict_envelope);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = DecoderConfig::from_json_str(r#"{"log_level": "LOUD"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "LOUD"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DecoderConfig::from_json_str(r#"{"terminator": [0]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_schema_dir_rejected() {
        let err = DecoderConfig::from_json_str(r#"{"schema_dir": " "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySchemaDir));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = DecoderConfig::load(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_build_registry_with_schema_dir() {
        let temp = TempDir::new().unwrap();
        let schema_dir = temp.path().join("schemas");
        fs::create_dir(&schema_dir).unwrap();
        fs::write(
            schema_dir.join("voucher.json"),
            r#"{"type": "Voucher", "fields": [{"name": "code", "type": "string"}]}"#,
        )
        .unwrap();

        let config_path = temp.path().join("datalist.json");
        let content = serde_json::json!({ "schema_dir": schema_dir.display().to_string() });
        fs::write(&config_path, content.to_string()).unwrap();

        let config = DecoderConfig::load(&config_path).unwrap();
        let registry = config.build_registry().unwrap();
        assert!(registry.contains("Voucher"));
        assert!(registry.contains("Group"));
    }

    #[test]
    fn test_missing_schema_dir() {
        let config = DecoderConfig {
            schema_dir: Some("/definitely/not/here".to_string()),
            ..DecoderConfig::default()
        };
        assert!(matches!(
            config.build_registry(),
            Err(ConfigError::SchemaDirMissing(_))
        ));
    }
}
