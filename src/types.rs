//! Core domain types shared across the crate.

use serde::{Deserialize, Serialize};

/// A directed edge between two node identifiers.
///
/// Edges have no identity beyond the `(from_id, to_id)` pair; the pair is
/// unique in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from_id: i64,
    pub to_id: i64,
}

/// A node identifier with its descendants, as produced by the tree builder.
///
/// Built fresh per request and never persisted. Children keep the order the
/// store returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTree {
    pub id: i64,
    pub children: Vec<NodeTree>,
}

impl NodeTree {
    /// A leaf node with no children (yet).
    pub fn leaf(id: i64) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }
}
