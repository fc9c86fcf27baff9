//! Renaming a raw table onto canonical column names.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::input::DataTable;
use crate::mapping::SourceMapping;
use crate::schema::{ColumnInfo, ColumnInfoEntry};

/// Unify a freshly loaded raw table with its source mapping.
///
/// With `apply_renaming`, every mapped column present in `raw` takes its
/// canonical name; mapped columns absent from `raw` are skipped. Each
/// resulting column gets one ledger entry: unmapped columns are recorded with
/// an empty description and unit, mapped ones with the mapping's description
/// and unit. Values are never touched.
pub fn unify(
    raw: DataTable,
    mapping: &SourceMapping,
    apply_renaming: bool,
) -> Result<(DataTable, ColumnInfo)> {
    let mut table = raw;

    let renames: IndexMap<String, String> = if apply_renaming {
        mapping
            .unified_rows()
            .map(|row| (row.source_column.clone(), row.canonical_name.clone()))
            .collect()
    } else {
        IndexMap::new()
    };
    let applied = table.rename_columns(&renames)?;
    debug!(
        source = mapping.name(),
        renamed = applied.len(),
        mapped = renames.len(),
        "Applied column renames"
    );

    // canonical name -> source column, for renamed columns only
    let renamed_from: HashMap<&str, &str> = applied
        .iter()
        .map(|(old, new)| (new.as_str(), old.as_str()))
        .collect();

    let mut column_info = ColumnInfo::new();
    for column in &table.headers {
        let renamed = renamed_from
            .get(column.as_str())
            .and_then(|source_column| mapping.by_source(source_column));

        let entry = match renamed {
            Some(row) => ColumnInfoEntry {
                column: column.clone(),
                original_column: row.source_column.clone(),
                description: row.description.clone(),
                unit: row.unit.clone(),
                unified: true,
                source: mapping.name().to_string(),
            },
            None => match mapping.by_source(column) {
                Some(row) => ColumnInfoEntry {
                    column: column.clone(),
                    original_column: column.clone(),
                    description: row.description.clone(),
                    unit: row.unit.clone(),
                    unified: false,
                    source: mapping.name().to_string(),
                },
                None => ColumnInfoEntry::unknown(column.clone(), mapping.name()),
            },
        };
        column_info.register(entry)?;
    }

    Ok((table, column_info))
}
