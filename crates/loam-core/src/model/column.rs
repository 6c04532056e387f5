use serde::{Deserialize, Serialize};

use super::value::SqlValue;

/// Semantic column type
///
/// Rendered to a SQLite type affinity by the DDL generator. `Boolean` and
/// `Timestamp` have no native SQLite representation and map to INTEGER and
/// TEXT respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Blob,
    Boolean,
    Timestamp,
}

/// Key role of a column within its table
///
/// Exactly one column per table may carry `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyRole {
    Primary,
    None,
}

/// Default-value rule applied when a row omits the column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultRule {
    /// Set to the creation timestamp (CURRENT_TIMESTAMP)
    CurrentTimestamp,
    /// Set to a fixed literal value
    Value(SqlValue),
}

/// Column descriptor
///
/// Built builder-style; a bare `ColumnDef::new` is a nullable, non-key
/// column with no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name as it appears in the physical table
    pub name: String,

    /// Semantic type
    pub ty: ColumnType,

    /// Key role (at most one `Primary` per table)
    pub key: KeyRole,

    /// Optional default-value rule
    pub default: Option<DefaultRule>,

    /// Whether NULL is permitted
    pub nullable: bool,
}

impl ColumnDef {
    /// Create a new nullable, non-key column
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            key: KeyRole::None,
            default: None,
            nullable: true,
        }
    }

    /// Mark this column as the primary key
    pub fn primary_key(mut self) -> Self {
        self.key = KeyRole::Primary;
        self
    }

    /// Mark this column NOT NULL
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Attach a default-value rule
    pub fn default_rule(mut self, rule: DefaultRule) -> Self {
        self.default = Some(rule);
        self
    }

    /// Check whether this column is the primary key
    pub fn is_primary(&self) -> bool {
        self.key == KeyRole::Primary
    }
}
