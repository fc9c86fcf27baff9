//! Per-source column mappings onto the canonical vocabulary.

mod source;

pub use source::{ColumnMapping, MappingWarning, SourceMapping, SourceMappingBuilder};
