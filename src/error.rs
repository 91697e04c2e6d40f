//! Error types for NodeGraph.
//!
//! Domain failures (`NotFound`, `InvalidOperation`, `DuplicateResource`,
//! `MalformedRequest`) are raised deliberately and always carry a
//! human-readable message. Storage failures are classified once, in the
//! [`From<rusqlite::Error>`] impl, into the store-originated variants; the
//! HTTP layer maps each variant to a status code in a single switch.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NodeGraphError>;

#[derive(Debug, Error)]
pub enum NodeGraphError {
    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Request was well-formed but the operation is not allowed.
    #[error("{0}")]
    InvalidOperation(String),

    /// Resource already exists (duplicate `(from_id, to_id)` pair).
    #[error("{0}")]
    DuplicateResource(String),

    /// Request could not be parsed (missing header, bad body, bad path).
    #[error("{0}")]
    MalformedRequest(String),

    /// Backing store could not be reached or opened.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Backing store reported lock contention (busy/locked).
    #[error("store lock contention: {0}")]
    StoreLockContention(String),

    /// Backing store rejected the operation with a constraint violation.
    #[error("store integrity violation: {0}")]
    StoreIntegrity(String),

    /// Any other storage failure.
    #[error("store error: {0}")]
    Store(String),

    /// Configuration could not be loaded or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for NodeGraphError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg) => {
                let detail = msg.clone().unwrap_or_else(|| e.to_string());
                match e.code {
                    ErrorCode::ConstraintViolation => Self::StoreIntegrity(detail),
                    ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                        Self::StoreLockContention(detail)
                    }
                    ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::DiskFull => {
                        Self::StoreUnavailable(detail)
                    }
                    _ => Self::Store(detail),
                }
            }
            _ => Self::Store(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: ErrorCode) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code,
                extended_code: 0,
            },
            Some("boom".into()),
        )
    }

    #[test]
    fn constraint_violation_maps_to_integrity() {
        let err: NodeGraphError = sqlite_failure(ErrorCode::ConstraintViolation).into();
        assert!(matches!(err, NodeGraphError::StoreIntegrity(_)));
    }

    #[test]
    fn busy_and_locked_map_to_lock_contention() {
        for code in [ErrorCode::DatabaseBusy, ErrorCode::DatabaseLocked] {
            let err: NodeGraphError = sqlite_failure(code).into();
            assert!(matches!(err, NodeGraphError::StoreLockContention(_)));
        }
    }

    #[test]
    fn cannot_open_maps_to_unavailable() {
        let err: NodeGraphError = sqlite_failure(ErrorCode::CannotOpen).into();
        assert!(matches!(err, NodeGraphError::StoreUnavailable(_)));
    }

    #[test]
    fn non_sqlite_errors_map_to_store() {
        let err: NodeGraphError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, NodeGraphError::Store(_)));
    }
}
