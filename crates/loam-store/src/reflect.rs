//! Schema reflection
//!
//! Rebuilds a schema registry from a live database via `PRAGMA table_info`.
//! Used by the seed importer so files can be validated against a schema that
//! came from migrations rather than from in-process declarations.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::persist::table_names;
use loam_core::{ColumnDef, ColumnType, SchemaRegistry, TableDef};
use rusqlite::Connection;

/// Reflect every physical table into a registry
///
/// Tables without a declared primary key (rowid-only tables) are skipped:
/// they cannot satisfy the descriptor invariant.
pub fn reflect_registry(conn: &Connection) -> Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();

    for name in table_names(conn)? {
        if let Some(table) = reflect_table(conn, &name)? {
            registry.register(table)?;
        }
    }

    Ok(registry)
}

/// Reflect a single table, or None if it has no primary key
pub fn reflect_table(conn: &Connection, name: &str) -> Result<Option<TableDef>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", name))
        .map_err(from_rusqlite)?;

    // table_info columns: cid, name, type, notnull, dflt_value, pk
    let columns = stmt
        .query_map([], |row| {
            let col_name: String = row.get(1)?;
            let declared_type: String = row.get(2)?;
            let not_null: i64 = row.get(3)?;
            let pk: i64 = row.get(5)?;
            Ok((col_name, declared_type, not_null != 0, pk != 0))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    if !columns.iter().any(|(_, _, _, pk)| *pk) {
        tracing::debug!(table = name, "skipping table without primary key");
        return Ok(None);
    }

    let mut builder = TableDef::new(name);
    for (col_name, declared_type, not_null, pk) in columns {
        let mut col = ColumnDef::new(col_name, column_type_from_decl(&declared_type));
        if pk {
            col = col.primary_key();
        } else if not_null {
            col = col.not_null();
        }
        builder = builder.column(col);
    }

    builder.build().map(Some)
}

/// Map a declared SQL type back onto a semantic column type
///
/// Follows SQLite's own affinity rules on the declared type text.
fn column_type_from_decl(decl: &str) -> ColumnType {
    let upper = decl.to_ascii_uppercase();
    if upper.contains("INT") {
        ColumnType::Integer
    } else if upper.contains("CHAR") || upper.contains("CLOB") || upper.contains("TEXT") {
        ColumnType::Text
    } else if upper.contains("BLOB") || upper.is_empty() {
        ColumnType::Blob
    } else if upper.contains("REAL") || upper.contains("FLOA") || upper.contains("DOUB") {
        ColumnType::Real
    } else {
        ColumnType::Text
    }
}
