//! Common types used throughout explorer-pager
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, used for GraphQL query variables
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Traversal Order
// ============================================================================

/// Order in which a connection's underlying sequence is traversed
///
/// The cursor index is zero-based and gapless. Under `Descending`, index 0
/// is the most recent item and the highest index the oldest one, so page 1
/// holds the newest items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TraversalOrder {
    /// Newest first (index 0 = most recent)
    #[default]
    Descending,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Descending => write!(f, "descending"),
        }
    }
}
