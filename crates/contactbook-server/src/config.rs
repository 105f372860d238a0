//! Server configuration.
//!
//! The server has no runtime configuration surface: the binary always runs
//! [`ServerConfig::default`]. Other configurations are built in code by tests
//! and embedders.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use contactbook_storage::{IdPolicy, InMemoryStore, ShardedStore};

use crate::error::ApiError;
use crate::state::AppState;

/// Listen port of the server binary.
pub const DEFAULT_PORT: u16 = 8080;

/// SQLite file used by the server binary, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "contacts.db";

/// Which [`ContactStore`](contactbook_storage::ContactStore) backs the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Process-local map behind one reader-writer lock.
    Memory,
    /// Process-local sharded map.
    Sharded,
    /// Single-table SQLite database at the given path.
    Sqlite { path: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub backend: Backend,
    pub id_policy: IdPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            backend: Backend::Sqlite {
                path: DEFAULT_DB_PATH.to_string(),
            },
            id_policy: IdPolicy::Uuid,
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to (all interfaces).
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Builds the registry selected by this configuration.
    pub fn build_state(&self) -> Result<AppState, ApiError> {
        let state = match &self.backend {
            Backend::Memory => {
                AppState::new(Arc::new(InMemoryStore::with_policy(self.id_policy)))
            }
            Backend::Sharded => {
                AppState::new(Arc::new(ShardedStore::with_policy(self.id_policy)))
            }
            Backend::Sqlite { path } => AppState::sqlite(path, self.id_policy)?,
        };
        Ok(state)
    }
}
