//! Merge command - combine several sources into one table.

use std::path::{Path, PathBuf};

use colored::Colorize;
use exotable::{Catalog, JoinHow, MergeSpec};

use super::{load_config, write_table};

pub fn run(
    config: Option<&Path>,
    sources: Vec<String>,
    on: Vec<String>,
    how: JoinHow,
    apply_renaming: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::standard(load_config(config)?)?;

    let mut spec = MergeSpec::new().how(how);
    if !on.is_empty() {
        spec = spec.on_columns(on);
    }

    let Some((first, rest)) = sources.split_first() else {
        return Err("No source to merge".into());
    };

    let mut table = catalog.load(first, apply_renaming)?;
    for source in rest {
        table = catalog.merge_into(&table, source, apply_renaming, &spec)?;
        if output.is_some() {
            eprintln!(
                "{} {} -> {} rows",
                "Merged".cyan().bold(),
                source.white(),
                table.row_count()
            );
        }
    }

    write_table(&table, output.as_deref())
}
