//! Application state holding the shared contact registry.
//!
//! [`AppState`] carries the registry as `Arc<dyn ContactStore>`. The store is
//! built once at startup and injected into the router; handlers never reach
//! for global state. Backends synchronize internally (reader-writer lock,
//! sharded map, or connection mutex), so no outer lock is taken here.

use std::sync::Arc;

use contactbook_storage::{ContactStore, IdPolicy, InMemoryStore, SqliteStore};

use crate::error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The contact registry.
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    /// Wraps an already-built store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        AppState { store }
    }

    /// Creates state backed by a SQLite database at `db_path`.
    pub fn sqlite(db_path: &str, policy: IdPolicy) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path, policy).map_err(|e| {
            ApiError::InternalError(format!("failed to open database '{}': {}", db_path, e))
        })?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Creates state with a fresh in-memory registry (for testing).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}
