//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import

use loam_core::SqlValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Name of the dataset this seed belongs to
    pub database: String,

    /// Row batches, one per target table
    pub tables: Vec<SeedTable>,
}

/// Rows destined for one table
///
/// Row maps are BTreeMaps so serialization (and therefore the seed digest)
/// is deterministic regardless of the YAML key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTable {
    /// Target table name
    pub table: String,

    /// Rows to insert; each key must be a declared column
    pub rows: Vec<BTreeMap<String, SqlValue>>,
}
