//! Row readers
//!
//! Read-back helpers for committed rows, used by tests and the CLI.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use loam_core::{Row, SqlValue, TableDef};
use rusqlite::{Connection, OptionalExtension};

/// Fetch every row of a table, ordered by primary key
pub fn fetch_all(conn: &Connection, table: &TableDef) -> Result<Vec<Row>> {
    let columns: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        columns.join(", "),
        table.name(),
        table.primary_key().name
    );

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |r| row_from_sql(table, r))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Fetch a single row by primary key value
pub fn get_by_key(conn: &Connection, table: &TableDef, key: &SqlValue) -> Result<Option<Row>> {
    let columns: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        columns.join(", "),
        table.name(),
        table.primary_key().name
    );

    conn.prepare(&sql)
        .map_err(from_rusqlite)?
        .query_row(rusqlite::params![key], |r| row_from_sql(table, r))
        .optional()
        .map_err(from_rusqlite)
}

/// Count the rows of a table
pub fn count(conn: &Connection, table: &TableDef) -> Result<i64> {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", table.name()),
        [],
        |row| row.get(0),
    )
    .map_err(from_rusqlite)
}

fn row_from_sql(table: &TableDef, r: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
    let mut row = Row::new(table.name());
    for (i, col) in table.columns().iter().enumerate() {
        let value: SqlValue = r.get(i)?;
        row.set_value(&col.name, value);
    }
    Ok(row)
}
