//! CLI command implementations.

pub mod columns;
pub mod merge;
pub mod sources;
pub mod unify;

use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use exotable::{CatalogConfig, ExoTable};
use tracing::debug;

/// Config from `path`, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<CatalogConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    };
    debug!(data_dir = %config.data_dir.display(), overrides = config.paths.len(), "Catalog config");
    Ok(config)
}

/// Ledger path written next to a CSV output.
pub fn ledger_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    output.with_file_name(format!("{}.columns.json", stem))
}

/// Write the table as CSV (and its ledger), or CSV to stdout.
pub fn write_table(table: &ExoTable, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            table.data().save_csv(path)?;
            let ledger = ledger_path(path);
            table.column_info().save(&ledger)?;

            eprintln!(
                "{} {} rows x {} columns from {}",
                "Wrote".green().bold(),
                table.row_count(),
                table.column_count(),
                table.sources().join(", ").white()
            );
            eprintln!("  Data:    {}", path.display());
            eprintln!("  Columns: {}", ledger.display());
        }
        None => table.data().write_csv(io::stdout().lock())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_path() {
        assert_eq!(
            ledger_path(Path::new("/tmp/merged.csv")),
            PathBuf::from("/tmp/merged.columns.json")
        );
        assert_eq!(
            ledger_path(Path::new("merged")),
            PathBuf::from("merged.columns.json")
        );
    }
}
