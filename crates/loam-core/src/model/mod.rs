//! Core schema model
//!
//! Record-type descriptors (tables and columns), SQL values, and rows.

mod column;
mod row;
mod table;
mod value;

pub use column::{ColumnDef, ColumnType, DefaultRule, KeyRole};
pub use row::Row;
pub use table::TableDef;
pub use value::SqlValue;
