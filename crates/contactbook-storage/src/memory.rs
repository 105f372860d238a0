//! In-memory implementation of [`ContactStore`].
//!
//! [`InMemoryStore`] keeps every contact in a `HashMap` behind one
//! `std::sync::RwLock`: list and get share the read lock, insert takes the
//! write lock. No I/O happens while the lock is held.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StorageError;
use crate::id::{IdGenerator, IdPolicy};
use crate::traits::ContactStore;
use crate::types::{Contact, ContactId, NewContact};

/// Map-plus-lock backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: RwLock<HashMap<ContactId, Contact>>,
    ids: IdGenerator,
}

impl InMemoryStore {
    /// Creates an empty store assigning UUID identifiers.
    pub fn new() -> Self {
        Self::with_policy(IdPolicy::Uuid)
    }

    /// Creates an empty store with the given identifier policy.
    pub fn with_policy(policy: IdPolicy) -> Self {
        InMemoryStore {
            contacts: RwLock::new(HashMap::new()),
            ids: IdGenerator::new(policy),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ContactId, Contact>>, StorageError> {
        self.contacts
            .read()
            .map_err(|_| StorageError::Unavailable("contact map lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ContactId, Contact>>, StorageError> {
        self.contacts
            .write()
            .map_err(|_| StorageError::Unavailable("contact map lock poisoned".into()))
    }
}

impl ContactStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn id_policy(&self) -> IdPolicy {
        self.ids.policy()
    }

    fn list(&self) -> Result<Vec<Contact>, StorageError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get(&self, id: &ContactId) -> Result<Contact, StorageError> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn insert(&self, candidate: NewContact) -> Result<Contact, StorageError> {
        let mut contacts = self.write()?;
        let contact = candidate.with_id(self.ids.next_id());
        contacts.insert(contact.id.clone(), contact.clone());
        tracing::debug!(id = %contact.id, "contact inserted");
        Ok(contact)
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.len())
    }
}
