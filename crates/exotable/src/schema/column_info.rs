//! Per-column provenance records.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExoError, Result};
use crate::units::Unit;

/// Provenance of one column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfoEntry {
    /// Column name in the table.
    pub column: String,
    /// Column name in the source before unification.
    pub original_column: String,
    /// Description of the column content.
    pub description: String,
    /// Unit of the values.
    pub unit: Unit,
    /// Whether the column carries a canonical name.
    pub unified: bool,
    /// Source the column came from.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

impl ColumnInfoEntry {
    /// Entry for a column nothing is known about.
    pub fn unknown(column: impl Into<String>, source: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            original_column: column.clone(),
            column,
            description: String::new(),
            unit: Unit::Unspecified,
            unified: false,
            source: source.into(),
        }
    }

    /// Returns true if both entries describe the same content: same
    /// description, unit and unification status.
    pub fn same_provenance(&self, other: &ColumnInfoEntry) -> bool {
        self.description == other.description
            && self.unit == other.unit
            && self.unified == other.unified
    }
}

/// Ordered ledger with one entry per table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnInfo {
    entries: Vec<ColumnInfoEntry>,
}

impl ColumnInfo {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Fails if the column already has one.
    pub fn register(&mut self, entry: ColumnInfoEntry) -> Result<()> {
        if self.contains(&entry.column) {
            return Err(ExoError::DuplicateColumnInfo(entry.column));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Get the entry for a column.
    pub fn get(&self, column: &str) -> Option<&ColumnInfoEntry> {
        self.entries.iter().find(|e| e.column == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnInfoEntry> {
        self.entries.iter()
    }

    /// Get all column names.
    pub fn columns(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.column.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of unified columns.
    pub fn unified_count(&self) -> usize {
        self.entries.iter().filter(|e| e.unified).count()
    }

    /// Save the ledger to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ExoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a ledger from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ExoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl FromIterator<ColumnInfoEntry> for ColumnInfo {
    fn from_iter<T: IntoIterator<Item = ColumnInfoEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(column: &str, unit: Unit) -> ColumnInfoEntry {
        ColumnInfoEntry {
            column: column.to_string(),
            original_column: column.to_string(),
            description: format!("{} description", column),
            unit,
            unified: true,
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut info = ColumnInfo::new();
        info.register(entry("pl_per", Unit::named("d"))).unwrap();

        let err = info.register(entry("pl_per", Unit::named("h"))).unwrap_err();
        assert!(matches!(err, ExoError::DuplicateColumnInfo(ref c) if c == "pl_per"));
        assert_eq!(info.len(), 1);
    }

    #[test]
    fn test_same_provenance_ignores_source() {
        let a = entry("pl_per", Unit::named("d"));
        let mut b = a.clone();
        b.source = "other".to_string();
        b.original_column = "Period".to_string();
        assert!(a.same_provenance(&b));

        b.unit = Unit::named("h");
        assert!(!a.same_provenance(&b));
    }

    #[test]
    fn test_json_is_a_list() {
        let info: ColumnInfo = [entry("pl_name", Unit::NoUnit)].into_iter().collect();
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["unit"], "N/A");
    }
}
