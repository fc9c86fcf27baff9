//! Unify command - load one source onto canonical column names.

use std::path::{Path, PathBuf};

use colored::Colorize;
use exotable::Catalog;

use super::{load_config, write_table};

pub fn run(
    config: Option<&Path>,
    source: String,
    file: Option<PathBuf>,
    apply_renaming: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if let Some(file) = file {
        config = config.with_path(source.as_str(), file);
    }
    let catalog = Catalog::standard(config)?;

    let table = catalog.load(&source, apply_renaming)?;

    if output.is_some() {
        eprintln!(
            "{} {} ({}/{} columns unified)",
            "Loaded".cyan().bold(),
            source.white(),
            table.column_info().unified_count(),
            table.column_count()
        );
    }
    write_table(&table, output.as_deref())
}
