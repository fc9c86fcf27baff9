//! Column provenance ledger attached to every table.

mod column_info;

pub use column_info::{ColumnInfo, ColumnInfoEntry};
