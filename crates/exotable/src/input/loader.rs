//! Loaders producing raw tables for unification.

use std::path::{Path, PathBuf};

use tracing::info;

use super::parser::{Parser, ParserConfig};
use super::source::{DataTable, SourceMetadata};
use crate::error::Result;

/// Anything that can produce a fully materialized raw table.
pub trait TableLoader {
    fn load(&self) -> Result<DataTable>;
}

/// In-memory tables load as a copy of themselves.
impl TableLoader for DataTable {
    fn load(&self) -> Result<DataTable> {
        Ok(self.clone())
    }
}

/// A delimited text file on disk.
#[derive(Debug, Clone)]
pub struct DelimitedFile {
    path: PathBuf,
    config: ParserConfig,
}

impl DelimitedFile {
    pub fn new(path: impl Into<PathBuf>, config: ParserConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, also returning metadata about it.
    pub fn load_with_metadata(&self) -> Result<(DataTable, SourceMetadata)> {
        let (table, metadata) = Parser::with_config(self.config.clone()).parse_file(&self.path)?;
        info!(
            file = %metadata.file,
            format = %metadata.format,
            rows = metadata.row_count,
            columns = metadata.column_count,
            "Loaded table"
        );
        Ok((table, metadata))
    }
}

impl TableLoader for DelimitedFile {
    fn load(&self) -> Result<DataTable> {
        self.load_with_metadata().map(|(table, _)| table)
    }
}
