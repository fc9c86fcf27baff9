//! Sources command - list the built-in catalogs.

use std::path::Path;

use colored::Colorize;
use exotable::Catalog;

use super::load_config;

pub fn run(config: Option<&Path>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::standard(load_config(config)?)?;

    if json_output {
        let sources: Vec<_> = catalog
            .iter()
            .map(|source| {
                let path = catalog
                    .config()
                    .resolve_path(source.name(), &source.load.default_path);
                serde_json::json!({
                    "name": source.name(),
                    "path": path,
                    "available": path.exists(),
                    "mapped_columns": source.mapping.len(),
                    "unified_columns": source.mapping.unified_rows().count(),
                    "warnings": source.mapping.warnings(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&sources)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Sources under".cyan().bold(),
        catalog.config().data_dir.display().to_string().white()
    );
    println!();

    for source in catalog.iter() {
        let path = catalog
            .config()
            .resolve_path(source.name(), &source.load.default_path);
        let marker = if path.exists() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {} {} ({} unified / {} mapped)",
            marker,
            source.name().white().bold(),
            source.mapping.unified_rows().count(),
            source.mapping.len()
        );
        println!("      {}", path.display().to_string().dimmed());
        for warning in source.mapping.warnings() {
            println!("      {} {:?}", "warning:".yellow(), warning);
        }
    }

    Ok(())
}
