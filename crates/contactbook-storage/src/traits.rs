//! The [`ContactStore`] trait defining the registry contract for contacts.
//!
//! All backends (InMemoryStore, ShardedStore, SqliteStore) implement this
//! trait and are fully swappable behind `Arc<dyn ContactStore>`.
//!
//! Every method takes `&self`: backends synchronize internally so a single
//! store can be shared across request tasks. Reads may run concurrently;
//! an insert excludes every other operation on the same store.

use crate::error::StorageError;
use crate::id::IdPolicy;
use crate::types::{Contact, ContactId, NewContact};

/// The storage contract for contacts.
pub trait ContactStore: Send + Sync {
    /// Short backend name used in logs ("memory", "sharded", "sqlite").
    fn backend_name(&self) -> &'static str;

    /// The identifier policy applied by [`ContactStore::insert`].
    fn id_policy(&self) -> IdPolicy;

    /// Returns every stored contact in unspecified order.
    ///
    /// An empty store yields an empty vector.
    fn list(&self) -> Result<Vec<Contact>, StorageError>;

    /// Returns the contact whose id equals `id` exactly.
    ///
    /// Fails with [`StorageError::NotFound`] when no contact matches.
    fn get(&self, id: &ContactId) -> Result<Contact, StorageError>;

    /// Assigns a fresh identifier to `candidate`, stores it, and returns the
    /// stored contact.
    fn insert(&self, candidate: NewContact) -> Result<Contact, StorageError>;

    /// Number of stored contacts.
    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.list()?.len())
    }
}
