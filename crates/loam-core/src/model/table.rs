use serde::{Deserialize, Serialize};

use crate::errors::{LoamError, LoamErrorKind, Result};

use super::column::{ColumnDef, KeyRole};

/// Table descriptor - a named record type with ordered, typed columns
///
/// Descriptors are immutable once built: `TableDef::build` validates the
/// single-primary-key invariant and duplicate column names, and the struct
/// exposes no mutation afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Start building a table descriptor with the given name
    pub fn new(name: impl Into<String>) -> TableDefBuilder {
        TableDefBuilder {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared columns, in declaration order
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The primary key column
    ///
    /// Always present: `build` rejects descriptors without one.
    pub fn primary_key(&self) -> &ColumnDef {
        self.columns
            .iter()
            .find(|c| c.is_primary())
            .expect("TableDef::build guarantees a primary key")
    }
}

/// Builder for `TableDef`
#[derive(Debug, Clone)]
pub struct TableDefBuilder {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableDefBuilder {
    /// Append a column (declaration order is preserved)
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Validate and produce the immutable descriptor
    ///
    /// Rejects tables with zero or multiple primary-key columns and tables
    /// with duplicate column names.
    pub fn build(self) -> Result<TableDef> {
        if self.name.is_empty() {
            return Err(LoamError::new(LoamErrorKind::InvalidInput)
                .with_op("table_build")
                .with_message("table name must not be empty"));
        }

        let key_count = self
            .columns
            .iter()
            .filter(|c| c.key == KeyRole::Primary)
            .count();

        if key_count == 0 {
            return Err(LoamError::new(LoamErrorKind::MissingPrimaryKey)
                .with_op("table_build")
                .with_table(&self.name)
                .with_message("exactly one column must be the primary key"));
        }
        if key_count > 1 {
            return Err(LoamError::new(LoamErrorKind::DuplicatePrimaryKey)
                .with_op("table_build")
                .with_table(&self.name)
                .with_message(format!("{} columns marked as primary key", key_count)));
        }

        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(LoamError::new(LoamErrorKind::DuplicateColumn)
                    .with_op("table_build")
                    .with_table(&self.name)
                    .with_column(&col.name)
                    .with_message("column declared twice"));
            }
        }

        Ok(TableDef {
            name: self.name,
            columns: self.columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnType;

    fn students() -> TableDef {
        TableDef::new("students")
            .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
            .column(ColumnDef::new("name", ColumnType::Text))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_preserves_column_order() {
        let table = students();
        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name"]);
        assert_eq!(table.primary_key().name, "id");
    }

    #[test]
    fn test_build_rejects_missing_key() {
        let result = TableDef::new("students")
            .column(ColumnDef::new("name", ColumnType::Text))
            .build();
        assert_eq!(
            result.unwrap_err().kind(),
            LoamErrorKind::MissingPrimaryKey
        );
    }

    #[test]
    fn test_build_rejects_two_keys() {
        let result = TableDef::new("students")
            .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
            .column(ColumnDef::new("email", ColumnType::Text).primary_key())
            .build();
        assert_eq!(
            result.unwrap_err().kind(),
            LoamErrorKind::DuplicatePrimaryKey
        );
    }

    #[test]
    fn test_build_rejects_duplicate_column() {
        let result = TableDef::new("students")
            .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
            .column(ColumnDef::new("name", ColumnType::Text))
            .column(ColumnDef::new("name", ColumnType::Text))
            .build();
        assert_eq!(result.unwrap_err().kind(), LoamErrorKind::DuplicateColumn);
    }

    #[test]
    fn test_column_lookup() {
        let table = students();
        assert!(table.column("name").is_some());
        assert!(table.column("missing").is_none());
    }
}
