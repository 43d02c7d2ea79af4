//! Chess Server
//!
//! An Axum-based web server exposing the king-capture chess engine:
//! - the shared board and move endpoints under `/chess`
//! - user registration and login under `/auth`
//! - finished games served back from SQLite
//!
//! The whole process holds exactly one [`GameSession`]; every caller plays
//! on the same board.

mod api;
mod auth;
mod db;
mod models;
mod repo;

use anyhow::Context;
use auth::AuthKeys;
use axum::routing::{get, post};
use axum::Router;
use chess_rules::GameSession;
use db::DbPool;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single live game session. All mutation goes through this lock.
    pub session: Arc<Mutex<GameSession>>,
    /// Database connection for finished games and users.
    pub db: DbPool,
    /// JWT signing and verification keys.
    pub auth: AuthKeys,
}

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
async fn health() -> &'static str {
    "ok"
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/chess/board", get(api::game::get_board))
        .route("/chess/move", post(api::game::make_move))
        .route("/chess/reset", post(api::game::reset_game))
        .route("/chess/game-history/:id", get(api::game::game_history))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .with_state(state)
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("CHESS_DB").unwrap_or_else(|_| "data/chess_game.db".to_string());
    if let Some(dir) = std::path::Path::new(&db_path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).context("Failed to create data directory")?;
        }
    }
    let db = db::init_db(&db_path).context("Failed to initialize database")?;

    let secret = std::env::var("CHESS_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("CHESS_JWT_SECRET not set, using a development secret");
        "development-secret".to_string()
    });

    let state = AppState {
        session: Arc::new(Mutex::new(GameSession::new())),
        db,
        auth: AuthKeys::from_secret(secret.as_bytes()),
    };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
