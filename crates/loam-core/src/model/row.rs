use serde::{Deserialize, Serialize};

use super::value::SqlValue;

/// An in-memory row conforming to a table descriptor
///
/// The seed instance of the data model: an ordered set of (column, value)
/// pairs targeting one table. The column set must be a subset of the
/// descriptor's declared columns; the session validates this on `add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    table: String,
    values: Vec<(String, SqlValue)>,
}

impl Row {
    /// Create an empty row targeting the given table
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: Vec::new(),
        }
    }

    /// Target table name
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Set a column value, replacing any prior value for that column
    pub fn set(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        let column = column.into();
        let value = value.into();
        if let Some(slot) = self.values.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.values.push((column, value));
        }
        self
    }

    /// Get a column value, if set
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Set columns in place (used by the session to back-fill assigned keys)
    pub fn set_value(&mut self, column: &str, value: SqlValue) {
        if let Some(slot) = self.values.iter_mut().find(|(c, _)| c == column) {
            slot.1 = value;
        } else {
            self.values.push((column.to_string(), value));
        }
    }

    /// Column/value pairs, in insertion order
    pub fn values(&self) -> &[(String, SqlValue)] {
        &self.values
    }

    /// Column names, in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(c, _)| c.as_str())
    }

    /// Check whether no columns are set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
