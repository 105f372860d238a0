//! Storage abstraction for contactbook contacts.
//!
//! Provides the [`ContactStore`] trait defining the registry contract that all
//! backends implement, plus three first-class backends:
//! [`InMemoryStore`], [`ShardedStore`] and [`SqliteStore`].
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: Contact, ContactId, NewContact
//! - [`id`]: identifier policies and the lock-free id generator
//! - [`traits`]: ContactStore trait definition
//! - [`memory`]: InMemoryStore (single reader-writer lock over a map)
//! - [`sharded`]: ShardedStore (sharded concurrent map)
//! - [`schema`]: SQLite table bootstrap
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod id;
pub mod memory;
pub mod schema;
pub mod sharded;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use id::{IdGenerator, IdPolicy};
pub use memory::InMemoryStore;
pub use sharded::ShardedStore;
pub use sqlite::SqliteStore;
pub use traits::ContactStore;
pub use types::{Contact, ContactId, NewContact};
