//! Columns command - list the canonical vocabulary.

use colored::Colorize;
use exotable::ColumnRegistry;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ColumnRegistry::standard();

    if json_output {
        let columns: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }

    println!(
        "{} ({})",
        "Canonical columns".cyan().bold(),
        registry.len()
    );
    println!();

    let width = registry.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for column in registry.iter() {
        let name = format!("{:width$}", column.name, width = width);
        let unit = format!("{:12}", column.expected_unit.to_string());
        println!("  {}  {}  {}", name.white().bold(), unit.yellow(), column.description);
    }

    Ok(())
}
