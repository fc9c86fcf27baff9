//! The unified table and its public API.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExoError, Result};
use crate::input::{DataTable, TableLoader};
use crate::mapping::SourceMapping;
use crate::schema::{ColumnInfo, ColumnInfoEntry};
use crate::transform::{MergeSpec, merge_tables, unify};
use crate::units::Unit;

/// What metadata lookups do with a column that is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Missing {
    /// Return `None` for the column.
    #[default]
    ReturnNone,
    /// Fail with [`ExoError::ColumnNotFound`].
    Error,
}

/// A table of exoplanet records with per-column provenance.
///
/// A table starts empty, is populated once with [`ExoTable::load`], and is
/// then combined with other tables through [`ExoTable::merge`], which leaves
/// both inputs untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExoTable {
    data: DataTable,
    column_info: ColumnInfo,
    sources: Vec<String>,
}

impl ExoTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(data: DataTable, column_info: ColumnInfo, sources: Vec<String>) -> Self {
        Self {
            data,
            column_info,
            sources,
        }
    }

    /// Load and unify a single source into a new table.
    pub fn from_source(
        loader: &dyn TableLoader,
        mapping: &SourceMapping,
        apply_renaming: bool,
    ) -> Result<Self> {
        let mut table = Self::new();
        table.load(loader.load()?, mapping, apply_renaming)?;
        Ok(table)
    }

    /// Populate this table from a raw table and its source mapping.
    ///
    /// Only an empty table can be loaded; use [`ExoTable::merge`] to add more
    /// sources.
    pub fn load(&mut self, raw: DataTable, mapping: &SourceMapping, apply_renaming: bool) -> Result<()> {
        if !self.data.is_empty() || !self.sources.is_empty() {
            return Err(ExoError::NonEmptyTarget {
                rows: self.data.row_count(),
            });
        }

        let (data, column_info) = unify(raw, mapping, apply_renaming)?;
        info!(
            source = mapping.name(),
            rows = data.row_count(),
            columns = data.column_count(),
            unified = column_info.unified_count(),
            "Loaded source"
        );

        self.data = data;
        self.column_info = column_info;
        self.sources.push(mapping.name().to_string());
        Ok(())
    }

    /// Combine with another table into a new one.
    pub fn merge(&self, other: &ExoTable, spec: &MergeSpec) -> Result<ExoTable> {
        merge_tables(self, other, spec)
    }

    /// Record provenance for a column that has none yet.
    pub fn register_column(
        &mut self,
        column: &str,
        description: &str,
        unit: Unit,
        unified: bool,
    ) -> Result<()> {
        if !self.data.has_column(column) {
            return Err(ExoError::ColumnNotFound(column.to_string()));
        }
        self.column_info.register(ColumnInfoEntry {
            column: column.to_string(),
            original_column: column.to_string(),
            description: description.to_string(),
            unit,
            unified,
            source: String::new(),
        })
    }

    /// The tabular payload.
    pub fn data(&self) -> &DataTable {
        &self.data
    }

    /// Provenance ledger.
    pub fn column_info(&self) -> &ColumnInfo {
        &self.column_info
    }

    /// Sources folded into this table, in merge order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn includes_source(&self, source: &str) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    /// Column names.
    pub fn columns(&self) -> &[String] {
        &self.data.headers
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.data.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Unit of one column.
    pub fn unit(&self, column: &str, missing: Missing) -> Result<Option<&Unit>> {
        Ok(self.entry(column, missing)?.map(|e| &e.unit))
    }

    /// Units of several columns, in the order given.
    pub fn units<'a, I>(&self, columns: I, missing: Missing) -> Result<Vec<Option<&Unit>>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        columns
            .into_iter()
            .map(|c| self.unit(c, missing))
            .collect()
    }

    /// Description of one column.
    pub fn description(&self, column: &str, missing: Missing) -> Result<Option<&str>> {
        Ok(self.entry(column, missing)?.map(|e| e.description.as_str()))
    }

    /// Descriptions of several columns, in the order given.
    pub fn descriptions<'a, I>(&self, columns: I, missing: Missing) -> Result<Vec<Option<&str>>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        columns
            .into_iter()
            .map(|c| self.description(c, missing))
            .collect()
    }

    fn entry(&self, column: &str, missing: Missing) -> Result<Option<&ColumnInfoEntry>> {
        match (self.column_info.get(column), missing) {
            (Some(entry), _) => Ok(Some(entry)),
            (None, Missing::ReturnNone) => Ok(None),
            (None, Missing::Error) => Err(ExoError::ColumnNotFound(column.to_string())),
        }
    }
}
