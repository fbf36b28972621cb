//! Pager - resolves pager-control requests into refetch parameters
//!
//! Wraps the calculator with a configured page size and traversal order,
//! and does the bounds checks the bare calculator leaves to its callers.

use super::calculator::{
    current_page_number_descending, descending_page_query, next_page_params,
    previous_page_params, total_pages,
};
use super::types::{
    Connection, PageChange, PageNumber, PageRequest, PageSize, PageSummary, QueryParam,
};
use crate::config::PagerConfig;
use crate::error::Result;
use crate::types::TraversalOrder;
use tracing::debug;

/// Page-change handler for one table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    page_size: PageSize,
    order: TraversalOrder,
}

impl Pager {
    /// Create a pager with the given page size
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            order: TraversalOrder::default(),
        }
    }

    /// Build a pager from a loaded configuration
    pub fn from_config(config: &PagerConfig) -> Result<Self> {
        Ok(Self::new(config.page_size()?).with_order(config.order))
    }

    /// Set traversal order
    #[must_use]
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Configured page size
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Configured traversal order
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Forward parameters for the following page, unchecked
    pub fn next_page_params<T>(&self, connection: &Connection<T>) -> QueryParam {
        next_page_params(connection, self.page_size)
    }

    /// Backward parameters for the preceding page, unchecked
    pub fn previous_page_params<T>(&self, connection: &Connection<T>) -> QueryParam {
        previous_page_params(connection, self.page_size)
    }

    /// Page the connection currently shows
    pub fn current_page<T>(&self, connection: &Connection<T>) -> Result<PageNumber> {
        match self.order {
            TraversalOrder::Descending => {
                current_page_number_descending(connection, self.page_size)
            }
        }
    }

    /// Parameters landing on `page_number`, unchecked
    pub fn page_query(&self, page_number: PageNumber, total_count: u64) -> QueryParam {
        match self.order {
            TraversalOrder::Descending => {
                descending_page_query(page_number, total_count, self.page_size)
            }
        }
    }

    /// Number of pages for `total_count` items
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_pages(total_count, self.page_size)
    }

    /// Resolve a pager request against the connection currently shown
    ///
    /// Next/previous honour `hasNextPage`/`hasPreviousPage`. Jumps are
    /// clamped to `[1, total_pages]`; an empty sequence never fetches.
    pub fn resolve<T>(&self, request: PageRequest, connection: &Connection<T>) -> PageChange {
        let info = &connection.page_info;
        let change = match request {
            PageRequest::Next if info.has_next_page => {
                PageChange::Fetch(self.next_page_params(connection))
            }
            PageRequest::Previous if info.has_previous_page => {
                PageChange::Fetch(self.previous_page_params(connection))
            }
            PageRequest::Next | PageRequest::Previous => PageChange::Stay,
            PageRequest::First => self.jump(1, connection.total_count),
            PageRequest::Last => self.jump(u64::MAX, connection.total_count),
            PageRequest::Jump(page) => self.jump(page, connection.total_count),
        };
        debug!("Resolved {:?} to {:?}", request, change);
        change
    }

    /// Everything a pager control needs to render
    pub fn summary<T>(&self, connection: &Connection<T>) -> Result<PageSummary> {
        Ok(PageSummary {
            current_page: self.current_page(connection)?,
            total_pages: self.total_pages(connection.total_count),
            has_next_page: connection.page_info.has_next_page,
            has_previous_page: connection.page_info.has_previous_page,
        })
    }

    fn jump(&self, page: PageNumber, total_count: u64) -> PageChange {
        let last_page = self.total_pages(total_count);
        if last_page == 0 {
            return PageChange::Stay;
        }
        let page = page.clamp(1, last_page);
        PageChange::Fetch(self.page_query(page, total_count))
    }
}
