//! Error helpers for loam-store
//!
//! Wraps loam-core's LoamError with store-specific constructors

use loam_core::errors::{LoamError, LoamErrorKind};

/// Result type alias using LoamError
pub type Result<T> = std::result::Result<T, LoamError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> LoamError {
    LoamError::new(LoamErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> LoamError {
    LoamError::new(LoamErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> LoamError {
    LoamError::new(LoamErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> LoamError {
    LoamError::new(LoamErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
