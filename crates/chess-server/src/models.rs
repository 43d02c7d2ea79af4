//! Request/response bodies and database row types.

use serde::{Deserialize, Serialize};

/// A finished game as persisted and served back to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Database-assigned game id.
    pub id: i64,
    /// Winning color name ("White" or "Black").
    pub winner: String,
    /// Move history, oldest first.
    pub history: Vec<String>,
    /// RFC 3339 timestamp of when the game finished.
    pub date: String,
}

/// A registered user row. Internal; never serialized to clients.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 password hash.
    pub password: String,
}

/// Body of `POST /chess/move`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
}

/// Body of `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response carrying a signed JWT.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
