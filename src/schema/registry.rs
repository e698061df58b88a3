//! Schema registry keyed by type tag
//!
//! - Every supported tag is registered once at startup
//! - Registering a tag twice is a fatal configuration error
//! - After startup the registry is only read, so it can be shared freely
//! - Extra schemas can be loaded from `<dir>/*.json`, one schema per file

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::errors::{SchemaError, SchemaResult};
use super::types::RecordSchema;
use crate::decoder::{coerce, FieldValue};
use crate::model::EntityCatalog;
use crate::observability::{log_event_with_fields, Event};

static BUILTIN: OnceLock<SchemaRegistry> = OnceLock::new();

/// In-memory registry of record schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Registered schemas indexed by type tag
    schemas: HashMap<String, RecordSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the schema of every compiled entity type.
    pub fn builtin() -> SchemaResult<Self> {
        let mut registry = Self::new();
        for schema in EntityCatalog::schemas() {
            registry.register(schema)?;
        }

        log_event_with_fields(
            Event::RegistryBuilt,
            &[("schemas", &registry.len().to_string())],
        );
        Ok(registry)
    }

    /// Returns the process-wide builtin registry, built on first use.
    pub fn global() -> &'static SchemaRegistry {
        BUILTIN.get_or_init(|| {
            Self::builtin().expect("compiled entity catalog registers each tag once")
        })
    }

    /// Registers a schema.
    ///
    /// # Errors
    ///
    /// - `DATALIST_INVALID_SCHEMA` if the schema has no fields, an empty tag,
    ///   a repeated field name, or a default that does not fit its field type
    /// - `DATALIST_SCHEMA_CONFLICT` if the tag is already registered
    pub fn register(&mut self, schema: RecordSchema) -> SchemaResult<()> {
        schema
            .validate_structure()
            .map_err(|e| SchemaError::invalid_schema(&schema.tag, e))?;
        let schema = typed_defaults(schema)?;

        if self.schemas.contains_key(&schema.tag) {
            return Err(SchemaError::conflict(&schema.tag));
        }

        log_event_with_fields(
            Event::SchemaRegistered,
            &[("fields", &schema.len().to_string()), ("tag", &schema.tag)],
        );

        self.schemas.insert(schema.tag.clone(), schema);
        Ok(())
    }

    /// Registers every schema of an iterator, stopping at the first error.
    pub fn register_all<I>(&mut self, schemas: I) -> SchemaResult<()>
    where
        I: IntoIterator<Item = RecordSchema>,
    {
        for schema in schemas {
            self.register(schema)?;
        }
        Ok(())
    }

    /// Loads all `*.json` schema files of a directory.
    ///
    /// Files are registered in file name order. Returns the number of
    /// schemas registered.
    pub fn load_dir(&mut self, dir: &Path) -> SchemaResult<usize> {
        let entries = fs::read_dir(dir).map_err(|e| {
            SchemaError::malformed_file(
                dir.display().to_string(),
                format!("Failed to read schema directory: {}", e),
            )
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed_file(
                    dir.display().to_string(),
                    format!("Failed to read directory entry: {}", e),
                )
            })?;

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        for path in &paths {
            self.load_schema_file(path)?;
        }

        log_event_with_fields(
            Event::SchemaDirLoaded,
            &[
                ("dir", &dir.display().to_string()),
                ("schemas", &paths.len().to_string()),
            ],
        );
        Ok(paths.len())
    }

    /// Loads a single schema file.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed_file(
                path.display().to_string(),
                format!("Failed to read file: {}", e),
            )
        })?;

        let schema: RecordSchema = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed_file(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        self.register(schema)
    }

    /// Looks up the schema for a type tag.
    ///
    /// An absent tag is an expected outcome, not an error.
    pub fn lookup(&self, tag: &str) -> Option<&RecordSchema> {
        self.schemas.get(tag)
    }

    /// Checks if a tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.schemas.contains_key(tag)
    }

    /// Returns all registered tags in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Returns all registered schemas.
    pub fn schemas(&self) -> impl Iterator<Item = &RecordSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Brings every declared default to its field's type.
///
/// Defaults read from JSON arrive untyped. A default that coerces to null
/// is dropped; one that does not coerce is an invalid schema.
fn typed_defaults(mut schema: RecordSchema) -> SchemaResult<RecordSchema> {
    for field in &mut schema.fields {
        if let Some(default) = field.default.take() {
            let typed = coerce(field.field_type, &default.to_json()).map_err(|e| {
                SchemaError::invalid_schema(
                    &schema.tag,
                    format!("default of field '{}': {}", field.name, e),
                )
            })?;
            field.default = match typed {
                FieldValue::Null => None,
                value => Some(value),
            };
        }
    }
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldType, SchemaErrorCode};
    use tempfile::TempDir;

    fn group_schema() -> RecordSchema {
        RecordSchema::new(
            "Group",
            vec![
                FieldDef::int("id"),
                FieldDef::string("name"),
                FieldDef::string("infotext"),
                FieldDef::int("count"),
            ],
        )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SchemaRegistry::new();
        registry.register(group_schema()).unwrap();

        let schema = registry.lookup("Group").unwrap();
        assert_eq!(schema.len(), 4);
        assert!(registry.contains("Group"));
        assert!(registry.lookup("Unknown").is_none());
    }

    #[test]
    fn test_register_types_defaults() {
        let schema: RecordSchema = serde_json::from_value(serde_json::json!({
            "type": "Badge",
            "fields": [
                {"name": "since", "type": "date", "default": "2024-01-01"},
                {"name": "level", "type": "int", "default": "5"},
                {"name": "note", "type": "string", "default": null}
            ]
        }))
        .unwrap();

        let mut registry = SchemaRegistry::new();
        registry.register(schema).unwrap();

        let fields = &registry.lookup("Badge").unwrap().fields;
        assert_eq!(
            fields[0].default,
            Some(FieldValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
        );
        assert_eq!(fields[1].default, Some(FieldValue::Int(5)));
        assert_eq!(fields[2].default, None);
    }

    #[test]
    fn test_register_rejects_uncoercible_default() {
        let mut registry = SchemaRegistry::new();
        let schema = RecordSchema::new(
            "Badge",
            vec![FieldDef::with_default("level", FieldType::Int, FieldValue::from("abc"))],
        );

        let err = registry.register(schema).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DatalistInvalidSchema);
        assert!(!registry.contains("Badge"));
    }

    #[test]
    fn test_duplicate_registration_is_conflict() {
        let mut registry = SchemaRegistry::new();
        registry.register(group_schema()).unwrap();

        let err = registry.register(group_schema()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DatalistSchemaConflict);
        assert!(err.is_fatal());
        // The first registration stays intact
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_schema_rejected_at_registration() {
        let mut registry = SchemaRegistry::new();
        let err = registry.register(RecordSchema::new("Empty", vec![])).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DatalistInvalidSchema);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tags_sorted() {
        let mut registry = SchemaRegistry::new();
        registry
            .register_all(vec![
                RecordSchema::new("Item", vec![FieldDef::int("id")]),
                RecordSchema::new("Address", vec![FieldDef::int("customer_id")]),
                group_schema(),
            ])
            .unwrap();

        assert_eq!(registry.tags(), vec!["Address", "Group", "Item"]);
    }

    #[test]
    fn test_builtin_contains_catalog() {
        let registry = SchemaRegistry::builtin().unwrap();
        for tag in ["Group", "Item", "Order", "Address", "UserInfo", "Tour", "CartItem"] {
            assert!(registry.contains(tag), "missing builtin tag {}", tag);
        }
        assert_eq!(registry.len(), EntityCatalog::schemas().len());
    }

    #[test]
    fn test_global_is_shared() {
        let a = SchemaRegistry::global() as *const SchemaRegistry;
        let b = SchemaRegistry::global() as *const SchemaRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("badge.json"),
            r#"{"type": "Badge", "fields": [
                {"name": "id", "type": "int"},
                {"name": "since", "type": "date", "default": "2024-01-01"}
            ]}"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = SchemaRegistry::new();
        let loaded = registry.load_dir(temp_dir.path()).unwrap();
        assert_eq!(loaded, 1);

        let schema = registry.lookup("Badge").unwrap();
        assert_eq!(schema.fields[1].field_type, FieldType::Date);
        assert!(matches!(schema.fields[1].default, Some(FieldValue::Date(_))));
    }

    #[test]
    fn test_load_dir_malformed_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();

        let mut registry = SchemaRegistry::new();
        let err = registry.load_dir(temp_dir.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DatalistMalformedSchemaFile);
    }

    #[test]
    fn test_load_dir_conflicting_with_builtin() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("group.json"),
            r#"{"type": "Group", "fields": [{"name": "id", "type": "int"}]}"#,
        )
        .unwrap();

        let mut registry = SchemaRegistry::builtin().unwrap();
        let err = registry.load_dir(temp_dir.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DatalistSchemaConflict);
    }

    #[test]
    fn test_load_dir_uncoercible_default() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("badge.json"),
            r#"{"type": "Badge", "fields": [{"name": "id", "type": "int", "default": "abc"}]}"#,
        )
        .unwrap();

        let mut registry = SchemaRegistry::new();
        let err = registry.load_dir(temp_dir.path()).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::DatalistInvalidSchema);
    }

    #[test]
    fn test_load_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = SchemaRegistry::new();
        assert!(registry.load_dir(&temp_dir.path().join("absent")).is_err());
    }
}
