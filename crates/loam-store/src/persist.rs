//! Persistence runner
//!
//! Materializes every table registered in a schema registry as a physical
//! SQLite table. Safe to re-run: `CREATE TABLE IF NOT EXISTS` makes a second
//! invocation with tables already present a no-op. Writes no data rows.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use loam_core::ddl::create_table_sql;
use loam_core::SchemaRegistry;
use rusqlite::Connection;

/// Create every registered table if absent
///
/// Tables are created in registration order. Existing tables are left
/// untouched, including their rows.
pub fn create_all(conn: &Connection, registry: &SchemaRegistry) -> Result<()> {
    for table in registry.tables() {
        let sql = create_table_sql(table);
        tracing::debug!(table = table.name(), "creating table if absent");
        conn.execute(&sql, []).map_err(from_rusqlite)?;
    }
    Ok(())
}

/// List physical table names, sorted
///
/// Excludes SQLite's internal tables (`sqlite_sequence` etc).
pub fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )
        .map_err(from_rusqlite)?;

    let names = stmt
        .query_map([], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;

    Ok(names)
}
