//! # explorer-pager
//!
//! Cursor-to-page-number translation for block explorer tables backed by a
//! cursor-paginated GraphQL API.
//!
//! ## Features
//!
//! - **Numeric Cursors**: Cursors are validated decimal indices, parsed at the boundary
//! - **Page Numbers**: Derive the page a connection shows from its end cursor
//! - **Page Jumps**: Compute `last`/`before` variables landing on any page
//! - **Adjacent Pages**: `first`/`after` and `last`/`before` for next/previous
//! - **Variable Merging**: Merge parameters into an existing GraphQL variable set
//!
//! ## Quick Start
//!
//! ```rust
//! use explorer_pager::pagination::{
//!     current_page_number_descending, descending_page_query, Connection, PageInfo, PageSize,
//!     QueryParam,
//! };
//!
//! let size = PageSize::new(10)?;
//!
//! // Land on page 1 of 25 items
//! let params = descending_page_query(1, 25, size);
//! assert_eq!(params, QueryParam::backward("6", size));
//!
//! // Page shown by a connection ending on index 19
//! let connection: Connection<()> = Connection::new(Vec::new(), PageInfo::new("10", "19"), 25);
//! assert_eq!(current_page_number_descending(&connection, size)?, 2);
//! # Ok::<(), explorer_pager::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Page-change handlers (UI)                │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │ PageRequest
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │  Pager: configured page size + order, bounds checks       │
//! ├───────────────────────────────────────────────────────────┤
//! │  Calculator: nodes / next / previous / current / jump     │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │ QueryParam → GraphQL variables
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │                GraphQL transport (refetch)                │
//! └───────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cursor and page number calculations
pub mod pagination;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, PagerConfig};
pub use pagination::{Connection, Cursor, PageSize, Pager, QueryParam};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
