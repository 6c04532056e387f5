//! Shared schema registry
//!
//! Record types register themselves into a registry; the persistence runner
//! materializes every registered table and the session validates rows
//! against it. Registration order is preserved so tables are created in
//! declaration order.

use crate::errors::{LoamError, LoamErrorKind, Result};
use crate::model::TableDef;

/// Registry of declared record types
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: Vec<TableDef>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table descriptor
    ///
    /// Rejects a second registration under the same table name.
    pub fn register(&mut self, table: TableDef) -> Result<()> {
        if self.tables.iter().any(|t| t.name() == table.name()) {
            return Err(LoamError::new(LoamErrorKind::DuplicateTable)
                .with_op("register")
                .with_table(table.name())
                .with_message("table already registered"));
        }
        tracing::debug!(table = table.name(), "table registered");
        self.tables.push(table);
        Ok(())
    }

    /// Look up a table descriptor by name
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name() == name)
    }

    /// All registered tables, in registration order
    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    /// Number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check whether no tables are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnDef, ColumnType};

    fn table(name: &str) -> TableDef {
        TableDef::new(name)
            .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = SchemaRegistry::new();
        registry.register(table("students")).unwrap();
        registry.register(table("games")).unwrap();

        let names: Vec<&str> = registry.tables().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["students", "games"]);
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let mut registry = SchemaRegistry::new();
        registry.register(table("students")).unwrap();

        let err = registry.register(table("students")).unwrap_err();
        assert_eq!(err.kind(), LoamErrorKind::DuplicateTable);
    }

    #[test]
    fn test_lookup() {
        let mut registry = SchemaRegistry::new();
        registry.register(table("students")).unwrap();
        assert!(registry.table("students").is_some());
        assert!(registry.table("games").is_none());
    }
}
