//! CLI module
//!
//! Command-line interface over the pagination calculator.
//!
//! # Commands
//!
//! - `nodes` - Print the nodes of a connection snapshot
//! - `next` / `previous` - Refetch parameters for the adjacent page
//! - `current-page` - Page number a connection snapshot shows
//! - `jump` - Refetch parameters for an arbitrary page
//! - `summary` - Current page, page count and next/previous availability

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
