//! Task store error types.

use thiserror::Error;

/// Storage failures surfaced by the task store.
///
/// Every variant is recoverable: the caller keeps whatever it last rendered
/// and may simply retry the operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite rejected or failed a statement.
    #[error("Storage failure: {0}")]
    Database(#[from] rusqlite::Error),

    /// The data directory holding the database file could not be prepared.
    #[error("Storage failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for task store operations.
pub type StoreResult<T> = Result<T, StoreError>;
