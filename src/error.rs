// src/error.rs

//! Error types shared across the cookbook crate

use thiserror::Error;

/// Result type alias for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the store, the listing service, and their callers
#[derive(Error, Debug)]
pub enum Error {
    /// The backing database could not be reached or a query failed
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A write was rejected because a record broke a stored invariant
    #[error("Validation failed: {0}")]
    ValidationViolation(String),

    /// Filesystem work around the database failed
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Error::ValidationViolation(err.to_string())
            }
            _ => Error::StorageUnavailable(err.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_failure_maps_to_validation() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_CHECK),
            Some("CHECK constraint failed: length(instructions) >= 50".to_string()),
        );

        assert!(matches!(
            Error::from(sqlite_err),
            Error::ValidationViolation(_)
        ));
    }

    #[test]
    fn test_other_sqlite_failures_map_to_storage_unavailable() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
            None,
        );

        assert!(matches!(
            Error::from(sqlite_err),
            Error::StorageUnavailable(_)
        ));
        assert!(matches!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::StorageUnavailable(_)
        ));
    }

    #[test]
    fn test_io_failure_maps_to_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only mount");

        let err = Error::from(io_err);
        assert!(matches!(err, Error::IoError(_)));
        assert_eq!(err.to_string(), "I/O error: read-only mount");
    }
}
