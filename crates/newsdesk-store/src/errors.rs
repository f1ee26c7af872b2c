//! Error types for the storage backend.
//!
//! [`StoreError`] is the only error type returned by storage operations.
//! Nothing in the request path catches it: a storage fault propagates up
//! and surfaces as a generic server error.

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error (checkout timeout, open failure).
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failed.
    #[error("migration error: {message}")]
    Migration {
        /// Describes which migration failed and why.
        message: String,
    },
}

/// Convenience type alias for storage results.
pub type Result<T> = std::result::Result<T, StoreError>;
