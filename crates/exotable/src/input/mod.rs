//! Input parsing and data source handling.

mod loader;
mod parser;
mod source;

pub use loader::{DelimitedFile, TableLoader};
pub use parser::{Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
