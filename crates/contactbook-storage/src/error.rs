//! Storage error types for contactbook-storage.
//!
//! [`StorageError`] separates the one expected miss (an unknown contact id)
//! from faults of the backing store itself.

use thiserror::Error;

use crate::types::ContactId;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No contact carries the requested identifier.
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// The SQLite backend failed a statement.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The backend can no longer serve requests (e.g. a poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Returns `true` for the not-found miss, `false` for storage faults.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
