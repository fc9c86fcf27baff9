//! Exotable CLI - unify and merge exoplanet catalogs.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Columns { json } => commands::columns::run(json),

        Commands::Sources { json } => commands::sources::run(config, json),

        Commands::Unify {
            source,
            file,
            no_rename,
            output,
        } => commands::unify::run(config, source, file, !no_rename, output),

        Commands::Merge {
            sources,
            on,
            how,
            no_rename,
            output,
        } => commands::merge::run(config, sources, on, how, !no_rename, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
