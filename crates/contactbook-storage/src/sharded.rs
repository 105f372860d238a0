//! Sharded in-memory implementation of [`ContactStore`].
//!
//! [`ShardedStore`] swaps the single reader-writer lock of
//! [`InMemoryStore`](crate::memory::InMemoryStore) for a `DashMap`, which
//! locks one shard per key. Inserts touching different shards proceed in
//! parallel. A list walks the shards one at a time, so it observes each
//! insert either fully or not at all, but not a single global snapshot.

use dashmap::DashMap;

use crate::error::StorageError;
use crate::id::{IdGenerator, IdPolicy};
use crate::traits::ContactStore;
use crate::types::{Contact, ContactId, NewContact};

/// Sharded-lock backend.
#[derive(Debug, Default)]
pub struct ShardedStore {
    contacts: DashMap<ContactId, Contact>,
    ids: IdGenerator,
}

impl ShardedStore {
    /// Creates an empty store assigning UUID identifiers.
    pub fn new() -> Self {
        Self::with_policy(IdPolicy::Uuid)
    }

    /// Creates an empty store with the given identifier policy.
    pub fn with_policy(policy: IdPolicy) -> Self {
        ShardedStore {
            contacts: DashMap::new(),
            ids: IdGenerator::new(policy),
        }
    }
}

impl ContactStore for ShardedStore {
    fn backend_name(&self) -> &'static str {
        "sharded"
    }

    fn id_policy(&self) -> IdPolicy {
        self.ids.policy()
    }

    fn list(&self) -> Result<Vec<Contact>, StorageError> {
        Ok(self
            .contacts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn get(&self, id: &ContactId) -> Result<Contact, StorageError> {
        self.contacts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn insert(&self, candidate: NewContact) -> Result<Contact, StorageError> {
        let contact = candidate.with_id(self.ids.next_id());
        self.contacts.insert(contact.id.clone(), contact.clone());
        tracing::debug!(id = %contact.id, "contact inserted");
        Ok(contact)
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.contacts.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let store = ShardedStore::with_policy(IdPolicy::Sequential);
        let created = store.insert(NewContact::new("Bo", "b@y.org", "1")).unwrap();
        assert_eq!(created.id.as_str(), "1");
        assert_eq!(store.get(&created.id).unwrap(), created);
        assert!(store.get(&ContactId::from("2")).unwrap_err().is_not_found());
    }

    #[test]
    fn concurrent_inserts_are_not_lost() {
        let store = ShardedStore::new();
        let ids: Vec<ContactId> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        (0..100)
                            .map(|_| store.insert(NewContact::default()).unwrap().id)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 800);
        assert_eq!(store.count().unwrap(), 800);
        assert_eq!(store.list().unwrap().len(), 800);
    }
}
