//! Loam Store - SQLite persistence layer
//!
//! Provides:
//! - Connection management for file-backed and in-memory databases
//! - The persistence runner (`create_all`) materializing registered tables
//! - A unit-of-work session for single and bulk row commits
//! - Schema reflection from a live database
//! - An embedded migration framework with checksums
//! - Seed Format v0 parsing and import

pub mod db;
pub mod errors;
pub mod migrations;
pub mod persist;
pub mod reflect;
pub mod repo;
pub mod seed;
pub mod session;

// Re-export key types
pub use errors::Result;
pub use session::Session;
