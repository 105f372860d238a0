//! Contact identifier generation.
//!
//! Two interchangeable policies exist. [`IdPolicy::Uuid`] produces random
//! UUID v4 tokens and stays unique across restarts. [`IdPolicy::Sequential`]
//! counts up from 1 for the lifetime of the process only; a persisted store
//! reopened with this policy will hand out ids it already holds.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::types::ContactId;

/// How a store assigns identifiers to new contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Random UUID v4, hyphenated lowercase.
    #[default]
    Uuid,
    /// Process-scoped counter rendered as decimal text.
    Sequential,
}

/// Lock-free identifier source shared by all inserts of one store.
#[derive(Debug)]
pub struct IdGenerator {
    policy: IdPolicy,
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new(policy: IdPolicy) -> Self {
        IdGenerator {
            policy,
            counter: AtomicU64::new(0),
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Returns an identifier never returned before by this generator.
    pub fn next_id(&self) -> ContactId {
        match self.policy {
            IdPolicy::Uuid => ContactId(Uuid::new_v4().to_string()),
            IdPolicy::Sequential => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
                ContactId(n.to_string())
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}
