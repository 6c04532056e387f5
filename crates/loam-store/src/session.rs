//! Unit-of-work session
//!
//! Batches in-memory rows and commits them as a group. Rows are validated
//! against the schema registry when added; `commit` writes every pending row
//! inside a single transaction and back-fills storage-assigned keys.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use loam_core::errors::{LoamError, LoamErrorKind};
use loam_core::{Row, SchemaRegistry, SqlValue};
use rusqlite::{Connection, Transaction};

/// Unit-of-work over a single connection
///
/// ```no_run
/// # fn main() -> loam_store::Result<()> {
/// use loam_core::{ColumnDef, ColumnType, Row, SchemaRegistry, TableDef};
/// use loam_store::Session;
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(
///     TableDef::new("games")
///         .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
///         .column(ColumnDef::new("name", ColumnType::Text))
///         .build()?,
/// )?;
///
/// let mut conn = loam_store::db::open("games.db")?;
/// loam_store::persist::create_all(&conn, &registry)?;
///
/// let mut session = Session::new(&mut conn, &registry);
/// session.add(Row::new("games").set("name", "Breath of the Wild"))?;
/// let committed = session.commit()?;
/// assert!(committed[0].get("id").is_some());
/// # Ok(())
/// # }
/// ```
pub struct Session<'a> {
    conn: &'a mut Connection,
    registry: &'a SchemaRegistry,
    pending: Vec<Row>,
}

impl<'a> Session<'a> {
    /// Create a session over a connection and registry
    pub fn new(conn: &'a mut Connection, registry: &'a SchemaRegistry) -> Self {
        Self {
            conn,
            registry,
            pending: Vec::new(),
        }
    }

    /// Add a row to the pending set
    ///
    /// Validates that the target table is registered and that the row's
    /// columns are a subset of the declared columns. The row is not written
    /// until `commit`.
    pub fn add(&mut self, row: Row) -> Result<()> {
        let table = self.registry.table(row.table()).ok_or_else(|| {
            LoamError::new(LoamErrorKind::UnknownTable)
                .with_op("session_add")
                .with_table(row.table())
                .with_message("table is not registered")
        })?;

        for column in row.columns() {
            if table.column(column).is_none() {
                return Err(LoamError::new(LoamErrorKind::UnknownColumn)
                    .with_op("session_add")
                    .with_table(row.table())
                    .with_column(column)
                    .with_message("column is not declared on this table"));
            }
        }

        self.pending.push(row);
        Ok(())
    }

    /// Add several rows to the pending set
    pub fn add_all(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<()> {
        for row in rows {
            self.add(row)?;
        }
        Ok(())
    }

    /// Number of rows awaiting commit
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Commit every pending row in one transaction
    ///
    /// Returns the committed rows with storage-assigned primary keys filled
    /// in. On error nothing is written and the pending set is retained.
    pub fn commit(&mut self) -> Result<Vec<Row>> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;

        let mut committed = Vec::with_capacity(self.pending.len());
        for row in &self.pending {
            committed.push(insert_row(&tx, self.registry, row.clone())?);
        }

        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(rows = committed.len(), "session committed");
        self.pending.clear();
        Ok(committed)
    }
}

/// Insert one row and back-fill its primary key if storage assigned it
///
/// Shared by the session and the seed importer so both write paths behave
/// identically.
pub(crate) fn insert_row(tx: &Transaction, registry: &SchemaRegistry, mut row: Row) -> Result<Row> {
    // add() guarantees the table is registered
    let table = registry
        .table(row.table())
        .ok_or_else(|| LoamError::new(LoamErrorKind::Internal).with_op("session_commit"))?;

    if row.is_empty() {
        tx.execute(
            &format!("INSERT INTO {} DEFAULT VALUES", row.table()),
            [],
        )
        .map_err(from_rusqlite)?;
    } else {
        let columns: Vec<&str> = row.columns().collect();
        let placeholders: Vec<String> =
            (1..=columns.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            row.table(),
            columns.join(", "),
            placeholders.join(", ")
        );

        let params: Vec<&dyn rusqlite::ToSql> = row
            .values()
            .iter()
            .map(|(_, v)| v as &dyn rusqlite::ToSql)
            .collect();
        tx.execute(&sql, params.as_slice()).map_err(from_rusqlite)?;
    }

    // The key, if unset, is assigned by the storage target on commit
    let key = table.primary_key().name.clone();
    let key_unset = row.get(&key).map_or(true, SqlValue::is_null);
    if key_unset {
        row.set_value(&key, SqlValue::Integer(tx.last_insert_rowid()));
    }

    Ok(row)
}
