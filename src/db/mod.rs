//! SQLite schema and connection setup.

pub mod schema;
