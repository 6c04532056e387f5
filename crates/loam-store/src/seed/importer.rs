//! Seed importer orchestration
//!
//! Imports a seed file by reflecting the live schema, validating the seed
//! against it, and inserting every row within one transaction. Imports are
//! recorded in the `seed_imports` ledger by digest; importing an identical
//! seed twice is a no-op.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::reflect::reflect_registry;
use crate::seed::{compute_seed_digest, parse_seed_str_with_registry};
use crate::session::insert_row;
use loam_core::Row;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Import a seed file into the database
///
/// Expects migrations to have been applied (the `seed_imports` ledger comes
/// from migration 003). Returns the seed digest whether rows were written or
/// the digest was already in the ledger.
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| crate::errors::io_error("seed_read", e))?;
    let source = path.display().to_string();
    import_seed_str(&content, &source, conn)
}

/// Import a seed from a string (source is recorded in the ledger)
pub fn import_seed_str(content: &str, source: &str, conn: &mut Connection) -> Result<String> {
    // Validate against the schema as it exists in this database
    let registry = reflect_registry(conn)?;
    let seed = parse_seed_str_with_registry(content, Some(&registry))?;
    let digest = compute_seed_digest(&seed);

    if already_imported(conn, &digest)? {
        tracing::info!(digest = %digest, "seed already imported, skipping");
        return Ok(digest);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut row_count: i64 = 0;
    for batch in &seed.tables {
        for map in &batch.rows {
            let mut row = Row::new(&batch.table);
            for (column, value) in map {
                row.set_value(column, value.clone());
            }
            insert_row(&tx, &registry, row)?;
            row_count += 1;
        }
    }

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO seed_imports (digest, source, row_count, imported_at)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![digest, source, row_count, now],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(digest = %digest, rows = row_count, "seed imported");
    Ok(digest)
}

/// Check the ledger for a digest
fn already_imported(conn: &Connection, digest: &str) -> Result<bool> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM seed_imports WHERE digest = ?1",
            [digest],
            |_| Ok(true),
        )
        .unwrap_or(false))
}
