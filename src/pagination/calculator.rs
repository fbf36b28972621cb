//! Cursor/page-number calculations
//!
//! Pure functions translating between a connection snapshot and the query
//! parameters of a refetch. None of them hold state or do I/O.

use super::types::{Connection, Cursor, PageNumber, PageSize, QueryParam};
use crate::error::Result;

/// Project a connection's edges to their nodes, preserving order
pub fn nodes_of<T>(connection: &Connection<T>) -> Vec<&T> {
    connection.edges.iter().map(|edge| &edge.node).collect()
}

/// Forward parameters for the page after this one
///
/// Does not look at `hasNextPage`; past the end the transport simply
/// returns an empty page.
pub fn next_page_params<T>(connection: &Connection<T>, page_size: PageSize) -> QueryParam {
    QueryParam::forward(connection.page_info.end_cursor.clone(), page_size)
}

/// Backward parameters for the page before this one
///
/// Does not look at `hasPreviousPage`.
pub fn previous_page_params<T>(connection: &Connection<T>, page_size: PageSize) -> QueryParam {
    QueryParam::backward(connection.page_info.start_cursor.clone(), page_size)
}

/// Page number implied by the end cursor of a newest-first connection
///
/// Page 1 holds indices `0..page_size`, so the end cursor's index divided
/// by the page size identifies the block it falls in.
pub fn current_page_number_descending<T>(
    connection: &Connection<T>,
    page_size: PageSize,
) -> Result<PageNumber> {
    let end = connection.page_info.end()?;
    Ok(page_of_index(end, page_size))
}

/// Backward parameters landing on `page_number` of a newest-first sequence
///
/// The oldest page is the short one when `total_count` is not a multiple
/// of the page size. `offset` shifts every page boundary by the number of
/// slots that page is missing, so jumps land on stored indices.
///
/// `page_number` is not validated. Page 0 saturates to `before = "0"`.
pub fn descending_page_query(
    page_number: PageNumber,
    total_count: u64,
    page_size: PageSize,
) -> QueryParam {
    let size = page_size.as_u64();
    let remainder = total_count % size;
    let offset = size - remainder;
    let page_end_index = page_number.saturating_mul(size).saturating_add(1);
    let before = Cursor::new(page_end_index.saturating_sub(offset));

    tracing::trace!(
        page_number,
        total_count,
        page_size = size,
        offset,
        before = before.index(),
        "descending page query"
    );

    QueryParam::backward(before.to_string(), page_size)
}

/// Number of pages needed to show `total_count` items
pub fn total_pages(total_count: u64, page_size: PageSize) -> u64 {
    total_count.div_ceil(page_size.as_u64())
}

fn page_of_index(cursor: Cursor, page_size: PageSize) -> PageNumber {
    cursor.index() / page_size.as_u64() + 1
}
