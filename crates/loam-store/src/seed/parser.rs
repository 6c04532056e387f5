//! Seed parser with validation
//!
//! Parses YAML and validates schema version, target tables, and the
//! column-subset invariant against a schema registry.

#![allow(clippy::result_large_err)]

use crate::errors::{seed_validation, Result};
use crate::seed::format::SeedV0;
use loam_core::errors::{LoamError, LoamErrorKind};
use loam_core::SchemaRegistry;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path, registry: Option<&SchemaRegistry>) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str_with_registry(&content, registry)
}

/// Parse a seed from a string without schema validation
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    parse_seed_str_with_registry(content, None)
}

/// Parse a seed from a string, validating against a registry when given
pub fn parse_seed_str_with_registry(
    content: &str,
    registry: Option<&SchemaRegistry>,
) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed, registry)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0, registry: Option<&SchemaRegistry>) -> Result<()> {
    // Validate schema version
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    if seed.database.is_empty() {
        return Err(seed_validation("database name must not be empty"));
    }

    let Some(registry) = registry else {
        return Ok(());
    };

    // Validate target tables and the column-subset invariant
    for batch in &seed.tables {
        let Some(table) = registry.table(&batch.table) else {
            return Err(LoamError::new(LoamErrorKind::UnknownTable)
                .with_op("seed_parse")
                .with_table(&batch.table)
                .with_message("seed references a table absent from the schema"));
        };

        for row in &batch.rows {
            for column in row.keys() {
                if table.column(column).is_none() {
                    return Err(LoamError::new(LoamErrorKind::UnknownColumn)
                        .with_op("seed_parse")
                        .with_table(&batch.table)
                        .with_column(column)
                        .with_message("seed row sets a column absent from the schema"));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_core::{ColumnDef, ColumnType, TableDef};

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry
            .register(
                TableDef::new("games")
                    .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
                    .column(ColumnDef::new("title", ColumnType::Text))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    const VALID: &str = r#"
schema_version: 0
database: curriculum
tables:
  - table: games
    rows:
      - title: "Breath of the Wild"
"#;

    #[test]
    fn test_parse_valid_seed() {
        let seed = parse_seed_str_with_registry(VALID, Some(&registry())).unwrap();
        assert_eq!(seed.tables[0].rows.len(), 1);
    }

    #[test]
    fn test_rejects_wrong_version() {
        let yaml = VALID.replace("schema_version: 0", "schema_version: 7");
        let err = parse_seed_str(&yaml).unwrap_err();
        assert_eq!(err.kind(), LoamErrorKind::InvalidInput);
    }

    #[test]
    fn test_rejects_unknown_table() {
        let yaml = VALID.replace("table: games", "table: platforms");
        let err = parse_seed_str_with_registry(&yaml, Some(&registry())).unwrap_err();
        assert_eq!(err.kind(), LoamErrorKind::UnknownTable);
    }

    #[test]
    fn test_rejects_unknown_column() {
        let yaml = VALID.replace("title:", "publisher:");
        let err = parse_seed_str_with_registry(&yaml, Some(&registry())).unwrap_err();
        assert_eq!(err.kind(), LoamErrorKind::UnknownColumn);
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = parse_seed_str("schema_version: [oops").unwrap_err();
        assert_eq!(err.kind(), LoamErrorKind::InvalidInput);
    }
}
