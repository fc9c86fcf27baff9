//! Registry of canonical ("unified") column names.

mod canonical;
mod standard;

pub use canonical::{CanonicalColumn, ColumnRegistry};
