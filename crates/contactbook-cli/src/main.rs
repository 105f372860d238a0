//! Contact book CLI.
//!
//! Provides the `contactbook` binary for working with a contacts database
//! offline: list, look up, or add contacts in the same SQLite file the HTTP
//! server uses. Output is JSON on stdout, identical in shape to the HTTP API.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use contactbook_storage::{ContactId, ContactStore, IdPolicy, NewContact, SqliteStore, StorageError};

/// Contact book tools.
#[derive(Parser)]
#[command(name = "contactbook", about = "Contact book tools")]
struct Cli {
    /// Path to the contacts database file.
    #[arg(short, long, default_value = "contacts.db", global = true)]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print every contact as a JSON array.
    List,
    /// Print one contact by id.
    Get {
        /// Contact identifier.
        id: String,
    },
    /// Add a contact with a freshly assigned id.
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
}

/// Exit codes: 0 = success, 1 = contact not found, 3 = storage error.
fn main() {
    let cli = Cli::parse();

    let store = match SqliteStore::new(&cli.db, IdPolicy::Uuid) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", cli.db, e);
            process::exit(3);
        }
    };

    let result = match cli.command {
        Commands::List => store.list().map(|contacts| print_json(&contacts)),
        Commands::Get { id } => store.get(&ContactId(id)).map(|contact| print_json(&contact)),
        Commands::Add { name, email, phone } => store
            .insert(NewContact::new(name, email, phone))
            .map(|contact| print_json(&contact)),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(exit_code(&err));
    }
}

fn exit_code(err: &StorageError) -> i32 {
    match err {
        StorageError::NotFound(_) => 1,
        StorageError::Sqlite(_) | StorageError::Unavailable(_) => 3,
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize result: {}\"}}", e));
    println!("{}", json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_global_db() {
        let cli = Cli::try_parse_from([
            "contactbook",
            "add",
            "--name",
            "Ann",
            "--phone",
            "555",
            "--db",
            "other.db",
        ])
        .unwrap();
        assert_eq!(cli.db, "other.db");
        match cli.command {
            Commands::Add { name, email, phone } => {
                assert_eq!(name, "Ann");
                assert_eq!(email, "");
                assert_eq!(phone, "555");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn get_requires_an_id() {
        assert!(Cli::try_parse_from(["contactbook", "get"]).is_err());
    }

    #[test]
    fn not_found_exits_with_one() {
        assert_eq!(exit_code(&StorageError::NotFound(ContactId::from("x"))), 1);
        assert_eq!(exit_code(&StorageError::Unavailable("gone".into())), 3);
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
