//! SQL schema and connection setup for the SQLite backend.
//!
//! The single `contacts` table is created on open if absent. There is no
//! versioned migration: the table shape is fixed.

use rusqlite::Connection;

use crate::error::StorageError;

/// The `contacts` table definition.
pub const CREATE_CONTACTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id    TEXT NOT NULL PRIMARY KEY,
    name  TEXT,
    email TEXT,
    phone TEXT
);";

/// Opens (or creates) a SQLite database at `path` with WAL mode and the
/// `contacts` table in place.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Opens an in-memory SQLite database with the `contacts` table in place.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

/// Configures pragmas and creates the table.
fn configure(conn: &Connection) -> Result<(), StorageError> {
    // WAL keeps readers from other processes (e.g. the CLI) off the writer's path.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.execute_batch(CREATE_CONTACTS_TABLE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_exists_after_open() {
        let conn = open_in_memory().unwrap();
        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('contacts') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, vec!["id", "name", "email", "phone"]);
    }

    #[test]
    fn reopening_keeps_existing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        let path = path.to_str().unwrap();

        let conn = open_database(path).unwrap();
        conn.execute(
            "INSERT INTO contacts (id, name, email, phone) VALUES ('x', 'n', 'e', 'p')",
            [],
        )
        .unwrap();
        drop(conn);

        let conn = open_database(path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
