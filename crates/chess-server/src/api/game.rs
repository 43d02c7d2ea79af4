//! Game API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::AuthUser;
use crate::models::{GameRecord, MessageResponse, MoveRequest};
use crate::repo::GameRepo;
use crate::AppState;
use chess_rules::Board;

/// Get the current board.
///
/// # Endpoint
///
/// `GET /chess/board`
///
/// # Response
///
/// - `200 OK`: 8x8 JSON array, rank 8 first, each cell `null` or
///   `{"type": ..., "color": ...}`
pub async fn get_board(State(state): State<AppState>) -> Json<Board> {
    let session = state.session.lock().unwrap();
    Json(session.board().clone())
}

/// Apply a move for the authenticated caller.
///
/// The session mutex is held for the whole request, including the
/// persistence call on a winning move, so the persist-then-reset sequence
/// is never observable half-done by another request.
///
/// # Endpoint
///
/// `POST /chess/move` with body `{"from": "e2", "to": "e4"}`
///
/// # Response
///
/// - `200 OK`: the outcome message as plain text (rejections included)
/// - `401 Unauthorized`: missing or invalid token
/// - `500 Internal Server Error`: a winning move could not be persisted
pub async fn make_move(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<MoveRequest>,
) -> Result<String, StatusCode> {
    let sink = GameRepo::new(state.db.clone());
    let mut session = state.session.lock().unwrap();
    match session.apply_move(&body.from, &body.to, &user.username, &sink) {
        Ok(outcome) => Ok(outcome.to_string()),
        Err(err) => {
            tracing::error!(error = %err, "winning move could not be persisted");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Reset the game to the starting position.
///
/// # Endpoint
///
/// `POST /chess/reset`
///
/// # Response
///
/// - `200 OK`: `{"message": "Game has been reset."}`
/// - `401 Unauthorized`: missing or invalid token
pub async fn reset_game(State(state): State<AppState>, _user: AuthUser) -> Json<MessageResponse> {
    state.session.lock().unwrap().reset();
    Json(MessageResponse::new("Game has been reset."))
}

/// Fetch a finished game by id.
///
/// # Endpoint
///
/// `GET /chess/game-history/:id`
///
/// # Response
///
/// - `200 OK`: `{"id", "winner", "history", "date"}`
/// - `404 Not Found`: no game with that id
/// - `500 Internal Server Error`: database error
pub async fn game_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GameRecord>, (StatusCode, &'static str)> {
    let repo = GameRepo::new(state.db.clone());
    let record = repo
        .get(id)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Database error"))?
        .ok_or((StatusCode::NOT_FOUND, "Game not found"))?;
    Ok(Json(record))
}
