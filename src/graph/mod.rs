//! Edge storage and tree construction.

pub mod store;
pub mod tree;

pub use store::EdgeStore;
pub use tree::build_tree;
