//! Pagination module
//!
//! Translates between connection cursors and pager page numbers.
//!
//! # Overview
//!
//! Cursors handed out by the explorer API are decimal encodings of a
//! zero-based, gapless index into the full sequence. The calculator turns
//! a connection snapshot into the page number it represents, and a desired
//! page number into `first`/`after` or `last`/`before` refetch variables.
//! The [`Pager`] wraps that with a configured page size and the bounds
//! checks a pager control needs.

mod calculator;
mod pager;
mod types;

pub use calculator::{
    current_page_number_descending, descending_page_query, next_page_params, nodes_of,
    previous_page_params, total_pages,
};
pub use pager::Pager;
pub use types::{
    Connection, Cursor, Edge, PageChange, PageInfo, PageNumber, PageRequest, PageSize,
    PageSummary, QueryParam,
};
