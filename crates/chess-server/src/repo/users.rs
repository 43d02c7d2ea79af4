//! User repository.

use crate::db::DbPool;
use crate::models::User;
use rusqlite::{OptionalExtension, Result as SqliteResult};

/// Repository for the `users` table.
pub struct UserRepo {
    db: DbPool,
}

impl UserRepo {
    /// Create a new user repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Insert a new user with an already-hashed password.
    ///
    /// Fails with a constraint violation if the username is taken.
    pub fn create(&self, username: &str, password_hash: &str) -> SqliteResult<i64> {
        let conn = self.db.lock().unwrap();
        conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            [username, password_hash],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Look up a user by username.
    pub fn find(&self, username: &str) -> SqliteResult<Option<User>> {
        let conn = self.db.lock().unwrap();
        conn.query_row(
            "SELECT id, username, password FROM users WHERE username = ?1",
            [username],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password: row.get(2)?,
                })
            },
        )
        .optional()
    }
}
