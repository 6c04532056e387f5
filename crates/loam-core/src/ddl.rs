//! DDL generation
//!
//! Renders table descriptors to `CREATE TABLE IF NOT EXISTS` statements for
//! SQLite. Integer primary keys render as `INTEGER PRIMARY KEY`, making the
//! column an alias of the rowid so SQLite assigns keys omitted at insert.

use crate::model::{ColumnDef, ColumnType, DefaultRule, SqlValue, TableDef};

/// SQLite type affinity for a semantic column type
pub fn type_affinity(ty: ColumnType) -> &'static str {
    match ty {
        ColumnType::Integer | ColumnType::Boolean => "INTEGER",
        ColumnType::Real => "REAL",
        ColumnType::Text => "TEXT",
        ColumnType::Blob => "BLOB",
        ColumnType::Timestamp => "TEXT",
    }
}

/// Render a `CREATE TABLE IF NOT EXISTS` statement for a descriptor
pub fn create_table_sql(table: &TableDef) -> String {
    let columns: Vec<String> = table.columns().iter().map(column_sql).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table.name(),
        columns.join(",\n    ")
    )
}

fn column_sql(column: &ColumnDef) -> String {
    let mut sql = format!("{} {}", column.name, type_affinity(column.ty));

    if column.is_primary() {
        sql.push_str(" PRIMARY KEY");
    } else if !column.nullable {
        sql.push_str(" NOT NULL");
    }

    if let Some(rule) = &column.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(&default_sql(rule));
    }

    sql
}

fn default_sql(rule: &DefaultRule) -> String {
    match rule {
        DefaultRule::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
        DefaultRule::Value(value) => literal_sql(value),
    }
}

/// Render a value as a SQL literal (text is single-quote escaped)
fn literal_sql(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Integer(i) => i.to_string(),
        SqlValue::Real(r) => r.to_string(),
        SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        SqlValue::Blob(b) => format!("X'{}'", hex::encode(b)),
    }
}
