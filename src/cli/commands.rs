//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Translate between connection cursors and pager page numbers
#[derive(Parser, Debug)]
#[command(name = "explorer-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection snapshot file (JSON)
    #[arg(short = 'n', long, global = true)]
    pub connection: Option<PathBuf>,

    /// Inline connection snapshot JSON
    #[arg(long, global = true)]
    pub connection_json: Option<String>,

    /// Pager configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Page size, overrides the configuration file
    #[arg(short, long, global = true)]
    pub page_size: Option<u32>,

    /// Base GraphQL variables (JSON object) to merge query parameters into
    #[arg(long, global = true)]
    pub variables_json: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the nodes of the connection
    Nodes,

    /// Parameters for the page after the connection
    Next,

    /// Parameters for the page before the connection
    Previous,

    /// Page number the connection shows
    CurrentPage,

    /// Parameters landing on an arbitrary page
    Jump {
        /// Page to land on (1-based)
        #[arg(long)]
        page: u64,

        /// Total item count (defaults to the connection's totalCount)
        #[arg(long)]
        total_count: Option<u64>,
    },

    /// Current page, page count and next/previous availability
    Summary,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
