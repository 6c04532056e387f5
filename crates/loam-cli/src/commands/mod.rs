//! CLI command implementations

pub mod db;
pub mod seed;
