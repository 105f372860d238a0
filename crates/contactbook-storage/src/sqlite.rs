//! SQLite implementation of [`ContactStore`].
//!
//! [`SqliteStore`] persists contacts in the single `contacts` table. The
//! `rusqlite::Connection` is `!Sync`, so it lives behind a `std::sync::Mutex`;
//! SQLite's own statement-level serialization covers access from other
//! processes sharing the file.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::id::{IdGenerator, IdPolicy};
use crate::traits::ContactStore;
use crate::types::{Contact, ContactId, NewContact};

/// SQLite-backed implementation of [`ContactStore`].
pub struct SqliteStore {
    conn: Mutex<Connection>,
    ids: IdGenerator,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str, policy: IdPolicy) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(Self::from_connection(conn, policy))
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory(policy: IdPolicy) -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(Self::from_connection(conn, policy))
    }

    fn from_connection(conn: Connection, policy: IdPolicy) -> Self {
        SqliteStore {
            conn: Mutex::new(conn),
            ids: IdGenerator::new(policy),
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Unavailable("sqlite connection lock poisoned".into()))
    }

    /// Maps a `SELECT id, name, email, phone` row. NULL text columns
    /// (rows written by other tools) read back as empty strings.
    fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: ContactId(row.get(0)?),
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            email: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            phone: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    }
}

impl ContactStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn id_policy(&self) -> IdPolicy {
        self.ids.policy()
    }

    fn list(&self) -> Result<Vec<Contact>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT id, name, email, phone FROM contacts")?;
        let rows = stmt.query_map([], Self::row_to_contact)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn get(&self, id: &ContactId) -> Result<Contact, StorageError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare_cached("SELECT id, name, email, phone FROM contacts WHERE id = ?1")?;
        stmt.query_row(params![id.as_str()], Self::row_to_contact)
            .optional()?
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn insert(&self, candidate: NewContact) -> Result<Contact, StorageError> {
        let contact = candidate.with_id(self.ids.next_id());
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO contacts (id, name, email, phone) VALUES (?1, ?2, ?3, ?4)",
            params![
                contact.id.as_str(),
                contact.name,
                contact.email,
                contact.phone
            ],
        )?;
        tracing::debug!(id = %contact.id, "contact inserted");
        Ok(contact)
    }

    fn count(&self) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
