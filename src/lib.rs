//! NodeGraph — directed edge storage with tree reconstruction.
//!
//! Stores `(from_id, to_id)` edges between numeric node identifiers in a
//! SQLite table and serves, over HTTP, the tree of descendants reachable
//! from a chosen root node.

pub mod config;
pub mod db;
pub mod error;
pub mod graph;
pub mod http;
pub mod observability;
pub mod types;
