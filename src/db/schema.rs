//! SQLite schema initialization for NodeGraph.

use rusqlite::Connection;

// ---------------------------------------------------------------------------
// DDL constants — kept as separate strings so each statement can be executed
// individually, which makes error reporting clearer.
// ---------------------------------------------------------------------------

const CREATE_EDGE: &str = "\
CREATE TABLE IF NOT EXISTS edge (
  from_id INTEGER NOT NULL,
  to_id INTEGER NOT NULL
)";

// The unique index is the final authority against duplicate pairs; the
// handler-level existence check is only an optimization.
const CREATE_INDEXES: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_edge_from_to ON edge(from_id, to_id)",
    "CREATE INDEX IF NOT EXISTS idx_edge_to ON edge(to_id)",
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Open (or create) the SQLite database at `db_path` and apply the schema.
///
/// The returned connection has WAL mode and synchronous NORMAL already
/// configured.
///
/// # Errors
///
/// Returns a `rusqlite::Error` if the database cannot be opened or any DDL
/// statement fails.
pub fn initialize_database(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(CREATE_EDGE)?;
    for ddl in CREATE_INDEXES {
        conn.execute_batch(ddl)?;
    }

    Ok(conn)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
