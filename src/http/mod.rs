//! HTTP surface for the node-manager API.

pub mod context;
pub mod error;
pub mod handlers;
pub mod server;

pub use server::{router, serve, AppState};
