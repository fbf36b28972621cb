//! explorer-pager CLI
//!
//! Translates connection snapshots into page numbers and refetch variables

use clap::Parser;
use explorer_pager::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        let code = if e.is_data_contract_violation() { 2 } else { 1 };
        std::process::exit(code);
    }
}
