//! SQLite CRUD layer for the edge table.
//!
//! Uses `rusqlite` with `prepare_cached`, so the first call compiles each
//! statement and subsequent calls reuse it from the connection's internal
//! cache.

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::schema::initialize_database;
use crate::error::{NodeGraphError, Result};
use crate::types::Edge;

// ---------------------------------------------------------------------------
// SQL constants
// ---------------------------------------------------------------------------

const INSERT_EDGE_SQL: &str = "\
INSERT INTO edge (from_id, to_id) VALUES (?1, ?2)";

const FIND_EDGE_SQL: &str = "\
SELECT from_id, to_id FROM edge WHERE from_id = ?1 AND to_id = ?2";

const DELETE_EDGE_SQL: &str = "\
DELETE FROM edge WHERE from_id = ?1 AND to_id = ?2";

// rowid pins insertion order, so a traversal is deterministic.
const CHILDREN_OF_SQL: &str = "\
SELECT to_id FROM edge WHERE from_id = ?1 ORDER BY rowid";

const HAS_OUTGOING_SQL: &str = "\
SELECT EXISTS(SELECT 1 FROM edge WHERE from_id = ?1)";

// A node exists as soon as it participates in any edge, on either side.
const NODE_EXISTS_SQL: &str = "\
SELECT EXISTS(SELECT 1 FROM edge WHERE from_id = ?1 OR to_id = ?1)";

const COUNT_EDGES_SQL: &str = "SELECT COUNT(*) FROM edge";

// ---------------------------------------------------------------------------
// EdgeStore
// ---------------------------------------------------------------------------

/// Typed CRUD wrapper around the edge table.
pub struct EdgeStore {
    conn: Connection,
}

impl std::fmt::Debug for EdgeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeStore").finish_non_exhaustive()
    }
}

impl EdgeStore {
    /// Open (or create) the database at `db_path`, apply the schema, and
    /// return a ready-to-use store.
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = initialize_database(db_path)?;
        Ok(Self { conn })
    }

    /// Wrap an already-open connection. Useful in tests where the caller
    /// has already called `initialize_database(":memory:")`.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert a new edge.
    ///
    /// The single INSERT is atomic; the unique index on `(from_id, to_id)`
    /// rejects duplicates, which are surfaced as
    /// [`NodeGraphError::DuplicateResource`].
    pub fn create_edge(&self, from_id: i64, to_id: i64) -> Result<Edge> {
        let mut stmt = self.conn.prepare_cached(INSERT_EDGE_SQL)?;
        match stmt.execute(params![from_id, to_id]) {
            Ok(_) => Ok(Edge { from_id, to_id }),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(NodeGraphError::DuplicateResource(format!(
                    "Edge from {from_id} to {to_id} already exists."
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Exact-match lookup of an edge by its pair. No side effects.
    pub fn find_edge(&self, from_id: i64, to_id: i64) -> Result<Option<Edge>> {
        let mut stmt = self.conn.prepare_cached(FIND_EDGE_SQL)?;
        let edge = stmt
            .query_row(params![from_id, to_id], |row| {
                Ok(Edge {
                    from_id: row.get(0)?,
                    to_id: row.get(1)?,
                })
            })
            .optional()?;
        Ok(edge)
    }

    /// Delete an edge by its pair. Returns the number of rows removed
    /// (0 or 1); deleting a non-existent edge is not an error.
    pub fn delete_edge(&self, from_id: i64, to_id: i64) -> Result<usize> {
        let mut stmt = self.conn.prepare_cached(DELETE_EDGE_SQL)?;
        Ok(stmt.execute(params![from_id, to_id])?)
    }

    /// Every `to_id` for edges leaving `node_id`, in insertion order.
    pub fn children_of(&self, node_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(CHILDREN_OF_SQL)?;
        let ids = stmt
            .query_map(params![node_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(ids)
    }

    /// True if at least one edge leaves `node_id`.
    pub fn has_outgoing_edge(&self, node_id: i64) -> Result<bool> {
        let mut stmt = self.conn.prepare_cached(HAS_OUTGOING_SQL)?;
        let exists: i64 = stmt.query_row(params![node_id], |row| row.get(0))?;
        Ok(exists != 0)
    }

    /// True if `node_id` participates in the graph at all, as the source
    /// or the target of at least one edge.
    pub fn node_exists(&self, node_id: i64) -> Result<bool> {
        let mut stmt = self.conn.prepare_cached(NODE_EXISTS_SQL)?;
        let exists: i64 = stmt.query_row(params![node_id], |row| row.get(0))?;
        Ok(exists != 0)
    }

    /// Total number of stored edges.
    pub fn edge_count(&self) -> Result<i64> {
        let mut stmt = self.conn.prepare_cached(COUNT_EDGES_SQL)?;
        Ok(stmt.query_row([], |row| row.get(0))?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> EdgeStore {
        let conn = initialize_database(":memory:").unwrap();
        EdgeStore::from_connection(conn)
    }

    #[test]
    fn create_then_find_returns_the_pair() {
        let store = setup();
        let edge = store.create_edge(1, 2).unwrap();
        assert_eq!(edge, Edge { from_id: 1, to_id: 2 });

        let found = store.find_edge(1, 2).unwrap();
        assert_eq!(found, Some(Edge { from_id: 1, to_id: 2 }));
    }

    #[test]
    fn duplicate_create_fails_and_leaves_one_row() {
        let store = setup();
        store.create_edge(1, 2).unwrap();
        let err = store.create_edge(1, 2).unwrap_err();
        assert!(matches!(err, NodeGraphError::DuplicateResource(_)));
        assert_eq!(store.edge_count().unwrap(), 1);
    }

    #[test]
    fn reversed_pair_is_a_distinct_edge() {
        let store = setup();
        store.create_edge(1, 2).unwrap();
        store.create_edge(2, 1).unwrap();
        assert_eq!(store.edge_count().unwrap(), 2);
    }

    #[test]
    fn find_missing_edge_returns_none() {
        let store = setup();
        assert_eq!(store.find_edge(7, 8).unwrap(), None);
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let store = setup();
        store.create_edge(1, 2).unwrap();
        assert_eq!(store.delete_edge(1, 2).unwrap(), 1);
        assert_eq!(store.find_edge(1, 2).unwrap(), None);
    }

    #[test]
    fn delete_of_never_created_pair_returns_zero() {
        let store = setup();
        assert_eq!(store.delete_edge(9, 9).unwrap(), 0);
    }

    #[test]
    fn children_preserve_insertion_order() {
        let store = setup();
        store.create_edge(1, 5).unwrap();
        store.create_edge(1, 3).unwrap();
        store.create_edge(1, 4).unwrap();
        store.create_edge(2, 9).unwrap();
        assert_eq!(store.children_of(1).unwrap(), vec![5, 3, 4]);
        assert_eq!(store.children_of(42).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn has_outgoing_edge_checks_source_side_only() {
        let store = setup();
        store.create_edge(1, 2).unwrap();
        assert!(store.has_outgoing_edge(1).unwrap());
        assert!(!store.has_outgoing_edge(2).unwrap());
    }

    #[test]
    fn node_exists_covers_both_sides() {
        let store = setup();
        store.create_edge(1, 2).unwrap();
        assert!(store.node_exists(1).unwrap());
        assert!(store.node_exists(2).unwrap());
        assert!(!store.node_exists(3).unwrap());
    }
}
