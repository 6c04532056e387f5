//! Seed import system
//!
//! Provides:
//! - Seed Format v0 schema (YAML: rows per table)
//! - Parser with validation against a reflected schema registry
//! - Digest canonicalization
//! - Importer orchestration with an idempotence ledger

pub mod digest;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format::{SeedTable, SeedV0};
pub use importer::{import_seed, import_seed_str};
pub use parser::{parse_seed_file, parse_seed_str, parse_seed_str_with_registry};
