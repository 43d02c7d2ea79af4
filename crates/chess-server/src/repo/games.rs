//! Finished-game repository.

use crate::db::DbPool;
use crate::models::GameRecord;
use chess_rules::{BoxError, Color, GameRecordSink};
use rusqlite::{OptionalExtension, Result as SqliteResult};

/// Repository for the `games` table.
///
/// Doubles as the engine's [`GameRecordSink`]: the session hands every
/// finished game to [`GameRepo::insert`] before resetting.
pub struct GameRepo {
    db: DbPool,
}

impl GameRepo {
    /// Create a new game repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Persist a finished game and return its assigned id.
    ///
    /// The history is stored as a JSON array of the move record strings.
    pub fn insert(&self, winner: &str, history: &[String]) -> SqliteResult<i64> {
        let history_json = serde_json::to_string(history)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let conn = self.db.lock().unwrap();
        conn.execute(
            "INSERT INTO games (winner, history, date) VALUES (?1, ?2, ?3)",
            (winner, &history_json, chrono::Utc::now().to_rfc3339()),
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetch a finished game by id.
    pub fn get(&self, id: i64) -> SqliteResult<Option<GameRecord>> {
        let conn = self.db.lock().unwrap();
        conn.query_row(
            "SELECT id, winner, history, date FROM games WHERE id = ?1",
            [id],
            |row| {
                let history_json: String = row.get(2)?;
                let history = serde_json::from_str(&history_json).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(GameRecord {
                    id: row.get(0)?,
                    winner: row.get(1)?,
                    history,
                    date: row.get(3)?,
                })
            },
        )
        .optional()
    }
}

impl GameRecordSink for GameRepo {
    fn save_game(&self, winner: Color, history: &[String]) -> Result<i64, BoxError> {
        Ok(self.insert(&winner.to_string(), history)?)
    }
}
