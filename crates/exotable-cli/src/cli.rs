//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use exotable::JoinHow;
use std::path::PathBuf;

/// Exotable: unify and merge exoplanet catalogs
#[derive(Parser)]
#[command(name = "exotable")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog config file (JSON with data_dir and per-source paths)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the canonical column vocabulary
    Columns {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known sources and where their files are expected
    Sources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load one source and rename its columns to canonical names
    Unify {
        /// Source name (see `exotable sources`)
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Read this file instead of the configured one
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Keep the native column names
        #[arg(long)]
        no_rename: bool,

        /// Output CSV path; a <stem>.columns.json ledger is written next to it
        /// (default: CSV on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load several sources and merge them left to right
    Merge {
        /// Source names, in merge order
        #[arg(value_name = "SOURCE", num_args = 2.., required = true)]
        sources: Vec<String>,

        /// Join column present in every source (default: pl_name)
        #[arg(long)]
        on: Vec<String>,

        /// Join type: inner, left, right or outer
        #[arg(long, default_value = "outer")]
        how: JoinHow,

        /// Keep the native column names
        #[arg(long)]
        no_rename: bool,

        /// Output CSV path; a <stem>.columns.json ledger is written next to it
        /// (default: CSV on stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_merge() {
        let cli = Cli::parse_from([
            "exotable", "merge", "exoplaneteu", "exoplanetarchive", "--how", "inner", "--on",
            "pl_name", "-o", "out.csv",
        ]);
        match cli.command {
            Commands::Merge {
                sources, on, how, ..
            } => {
                assert_eq!(sources, vec!["exoplaneteu", "exoplanetarchive"]);
                assert_eq!(on, vec!["pl_name"]);
                assert_eq!(how, JoinHow::Inner);
            }
            _ => panic!("expected merge"),
        }
    }

    #[test]
    fn test_merge_needs_two_sources() {
        assert!(Cli::try_parse_from(["exotable", "merge", "sweetcat"]).is_err());
    }
}
