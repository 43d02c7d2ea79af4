//! Database setup for the chess server.

use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Thread-safe handle to the single SQLite connection.
pub type DbPool = Arc<Mutex<Connection>>;

/// Initialize the database with the schema.
///
/// Creates the two tables the service needs:
/// - `games`: finished games with winner, move history, and date
/// - `users`: registered players with hashed passwords
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file (use `:memory:` for in-memory)
///
/// # Errors
///
/// Returns an error if the database cannot be opened or schema creation fails.
pub fn init_db<P: AsRef<Path>>(path: P) -> SqliteResult<DbPool> {
    let conn = Connection::open(path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            winner TEXT NOT NULL,
            history TEXT NOT NULL,
            date TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        );
        ",
    )?;

    Ok(Arc::new(Mutex::new(conn)))
}
