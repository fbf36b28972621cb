//! Pagination types
//!
//! Value types shared by the calculator and the pager: the connection
//! snapshot handed over by the GraphQL transport, numeric cursors, page
//! sizes and the query parameters fed back into a refetch.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1-based page number shown by a pager control
pub type PageNumber = u64;

/// GraphQL variable names for the two pagination directions
const AFTER: &str = "after";
const FIRST: &str = "first";
const BEFORE: &str = "before";
const LAST: &str = "last";

// ============================================================================
// Cursor
// ============================================================================

/// Numeric connection cursor
///
/// The transport hands cursors over as opaque strings, but in this API they
/// are decimal encodings of a zero-based, gapless index into the full
/// sequence. A `Cursor` can only be obtained through a fallible parse, so a
/// malformed value surfaces at the boundary instead of inside arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cursor(u64);

impl Cursor {
    /// Create a cursor pointing at the given index
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    /// Parse a cursor from its decimal string form
    ///
    /// Only plain ASCII digits are accepted: no sign, no whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!("Rejecting non-numeric cursor: {:?}", raw);
            return Err(Error::malformed_cursor(raw));
        }
        raw.parse::<u64>().map(Self).map_err(|e| {
            tracing::debug!("Cursor {:?} out of range: {}", raw, e);
            Error::malformed_cursor(raw)
        })
    }

    /// Index into the full sequence
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cursor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.to_string()
    }
}

// ============================================================================
// Page Size
// ============================================================================

/// Number of items requested per page, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Default table page size
    pub const DEFAULT: PageSize = PageSize(10);

    /// Create a page size, rejecting zero
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidPageSize { value: 0 });
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Get the value widened for index arithmetic
    pub fn as_u64(self) -> u64 {
        u64::from(self.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Pagination variables for a refetch
///
/// Exactly one direction is ever populated. Serializes to the GraphQL
/// variable shape, e.g. `{"after": "19", "first": 10}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryParam {
    /// Forward pagination: `first` items after the cursor
    Forward {
        /// Cursor to start after
        after: String,
        /// Number of items to fetch
        first: PageSize,
    },
    /// Backward pagination: `last` items before the cursor
    Backward {
        /// Cursor to end before
        before: String,
        /// Number of items to fetch
        last: PageSize,
    },
}

impl QueryParam {
    /// Create forward parameters
    pub fn forward(after: impl Into<String>, first: PageSize) -> Self {
        Self::Forward {
            after: after.into(),
            first,
        }
    }

    /// Create backward parameters
    pub fn backward(before: impl Into<String>, last: PageSize) -> Self {
        Self::Backward {
            before: before.into(),
            last,
        }
    }

    /// Check if this is forward pagination
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward { .. })
    }

    /// Check if this is backward pagination
    pub fn is_backward(&self) -> bool {
        matches!(self, Self::Backward { .. })
    }

    /// Cursor the fetch is anchored on
    pub fn cursor(&self) -> &str {
        match self {
            Self::Forward { after, .. } => after,
            Self::Backward { before, .. } => before,
        }
    }

    /// Number of items requested
    pub fn page_size(&self) -> PageSize {
        match self {
            Self::Forward { first, .. } => *first,
            Self::Backward { last, .. } => *last,
        }
    }

    /// Render as a standalone GraphQL variable set
    pub fn to_variables(&self) -> JsonObject {
        let mut vars = JsonObject::new();
        self.merge_into(&mut vars);
        vars
    }

    /// Merge into an existing variable set
    ///
    /// Entity fields (address, pool id, ...) are left alone. Keys of the
    /// opposite direction are removed so the set never mixes both.
    pub fn merge_into(&self, vars: &mut JsonObject) {
        for key in [AFTER, FIRST, BEFORE, LAST] {
            vars.remove(key);
        }
        let (cursor_key, size_key) = match self {
            Self::Forward { .. } => (AFTER, FIRST),
            Self::Backward { .. } => (BEFORE, LAST),
        };
        vars.insert(
            cursor_key.to_string(),
            JsonValue::String(self.cursor().to_string()),
        );
        vars.insert(size_key.to_string(), JsonValue::from(self.page_size().get()));
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward { after, first } => write!(f, "after={after} first={first}"),
            Self::Backward { before, last } => write!(f, "before={before} last={last}"),
        }
    }
}

// ============================================================================
// Connection
// ============================================================================

/// One page of a larger ordered sequence, as returned by the GraphQL API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Edges in traversal order
    pub edges: Vec<Edge<T>>,
    /// Boundaries of this page
    pub page_info: PageInfo,
    /// Size of the full, unpaged sequence
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Connection<T> {
    /// Create a connection snapshot
    pub fn new(edges: Vec<Edge<T>>, page_info: PageInfo, total_count: u64) -> Self {
        Self {
            edges,
            page_info,
            total_count,
        }
    }

    /// Check if this page holds no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consume the connection, keeping only the nodes
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// A cursor paired with the item it locates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Raw cursor string
    pub cursor: String,
    /// The item
    pub node: T,
}

impl<T> Edge<T> {
    /// Create an edge
    pub fn new(cursor: impl Into<String>, node: T) -> Self {
        Self {
            cursor: cursor.into(),
            node,
        }
    }
}

/// Page boundary metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first edge on the page (empty when the page is)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_cursor: String,
    /// Cursor of the last edge on the page (empty when the page is)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_cursor: String,
    /// Whether more items follow this page
    #[serde(default)]
    pub has_next_page: bool,
    /// Whether items precede this page
    #[serde(default)]
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Create page info from the two boundary cursors
    pub fn new(start_cursor: impl Into<String>, end_cursor: impl Into<String>) -> Self {
        Self {
            start_cursor: start_cursor.into(),
            end_cursor: end_cursor.into(),
            ..Default::default()
        }
    }

    /// Set the next/previous flags
    #[must_use]
    pub fn with_flags(mut self, has_next_page: bool, has_previous_page: bool) -> Self {
        self.has_next_page = has_next_page;
        self.has_previous_page = has_previous_page;
        self
    }

    /// Parse the start cursor
    pub fn start(&self) -> Result<Cursor> {
        Cursor::parse(&self.start_cursor)
    }

    /// Parse the end cursor
    pub fn end(&self) -> Result<Cursor> {
        Cursor::parse(&self.end_cursor)
    }
}

/// Relay returns `null` boundary cursors for an empty page
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Pager requests
// ============================================================================

/// Page change requested through a pager control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Jump to page 1
    First,
    /// Step back one page
    Previous,
    /// Step forward one page
    Next,
    /// Jump to the last page
    Last,
    /// Jump to an arbitrary page
    Jump(PageNumber),
}

/// Outcome of resolving a page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageChange {
    /// Refetch with these parameters
    Fetch(QueryParam),
    /// Nothing to fetch; keep the current page
    Stay,
}

impl PageChange {
    /// Check if a refetch is needed
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Get the refetch parameters, if any
    pub fn query(&self) -> Option<&QueryParam> {
        match self {
            Self::Fetch(params) => Some(params),
            Self::Stay => None,
        }
    }
}

/// What a pager control needs to render itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Page the connection currently shows
    pub current_page: PageNumber,
    /// Number of pages in the full sequence
    pub total_pages: u64,
    /// Whether "next" should be enabled
    pub has_next_page: bool,
    /// Whether "previous" should be enabled
    pub has_previous_page: bool,
}
