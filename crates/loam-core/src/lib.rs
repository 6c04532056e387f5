//! Loam Core - Declarative schema model
//!
//! This crate provides the foundational data structures for Loam, including:
//! - Table and column descriptors with a single-primary-key invariant
//! - A shared schema registry that record types register into
//! - SQL value and row types shared by the session and seed importer
//! - DDL generation (`CREATE TABLE IF NOT EXISTS`) for SQLite
//! - Structured errors with stable codes
//! - A single-init tracing facility

pub mod ddl;
pub mod errors;
pub mod logging;
pub mod model;
pub mod registry;

// Re-export commonly used types
pub use errors::{LoamError, LoamErrorKind, Result};
pub use model::{ColumnDef, ColumnType, DefaultRule, KeyRole, Row, SqlValue, TableDef};
pub use registry::SchemaRegistry;
