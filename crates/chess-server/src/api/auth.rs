//! Auth API handlers.

use axum::{extract::State, http::StatusCode, Json};

use crate::models::{CredentialsRequest, MessageResponse, TokenResponse};
use crate::repo::UserRepo;
use crate::{auth, AppState};

/// Register a new user.
///
/// # Endpoint
///
/// `POST /auth/register` with body `{"username", "password"}`
///
/// # Response
///
/// - `201 Created`: `{"message": "User registered successfully"}`
/// - `400 Bad Request`: username or password missing
/// - `409 Conflict`: username already taken
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, &'static str)> {
    if body.username.is_empty() || body.password.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        ));
    }

    let hash = auth::hash_password(&body.password)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Password hashing failed"))?;

    let repo = UserRepo::new(state.db.clone());
    match repo.create(&body.username, &hash) {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new("User registered successfully")),
        )),
        Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
            Err((StatusCode::CONFLICT, "Username already exists"))
        }
        Err(_) => Err((StatusCode::INTERNAL_SERVER_ERROR, "Database error")),
    }
}

/// Log in and receive a bearer token.
///
/// # Endpoint
///
/// `POST /auth/login` with body `{"username", "password"}`
///
/// # Response
///
/// - `200 OK`: `{"token": <jwt>}`
/// - `401 Unauthorized`: unknown user or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, &'static str)> {
    const REJECTION: (StatusCode, &str) = (StatusCode::UNAUTHORIZED, "Invalid username or password");

    let repo = UserRepo::new(state.db.clone());
    let user = repo
        .find(&body.username)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Database error"))?
        .ok_or(REJECTION)?;

    if !auth::verify_password(&body.password, &user.password) {
        return Err(REJECTION);
    }

    let token = auth::issue_token(user.id, &user.username, &state.auth)
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Token issuance failed"))?;
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthKeys;
    use crate::db::init_db;
    use chess_rules::GameSession;
    use std::sync::{Arc, Mutex};

    fn test_state() -> AppState {
        AppState {
            session: Arc::new(Mutex::new(GameSession::new())),
            db: init_db(":memory:").expect("Failed to init test db"),
            auth: AuthKeys::from_secret(b"test-secret"),
        }
    }

    fn credentials(username: &str, password: &str) -> Json<CredentialsRequest> {
        Json(CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn register_creates_user() {
        let state = test_state();
        let (status, Json(message)) =
            register(State(state.clone()), credentials("alice", "s3cret"))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(message.message, "User registered successfully");
        assert!(UserRepo::new(state.db).find("alice").unwrap().is_some());
    }

    #[tokio::test]
    async fn register_requires_both_fields() {
        let state = test_state();
        let err = register(State(state.clone()), credentials("", "s3cret"))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        let err = register(State(state), credentials("alice", ""))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username() {
        let state = test_state();
        register(State(state.clone()), credentials("alice", "s3cret"))
            .await
            .unwrap();
        let err = register(State(state), credentials("alice", "other"))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let state = test_state();
        register(State(state.clone()), credentials("alice", "s3cret"))
            .await
            .unwrap();
        let Json(response) = login(State(state.clone()), credentials("alice", "s3cret"))
            .await
            .unwrap();

        let claims = auth::verify_token(&response.token, &state.auth).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let state = test_state();
        register(State(state.clone()), credentials("alice", "s3cret"))
            .await
            .unwrap();

        let err = login(State(state.clone()), credentials("alice", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);

        let err = login(State(state), credentials("nobody", "s3cret"))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn extractor_accepts_issued_token() {
        use crate::auth::AuthUser;
        use axum::extract::FromRequestParts;

        let state = test_state();
        register(State(state.clone()), credentials("alice", "s3cret"))
            .await
            .unwrap();
        let Json(response) = login(State(state.clone()), credentials("alice", "s3cret"))
            .await
            .unwrap();

        let request = axum::http::Request::builder()
            .uri("/chess/move")
            .header("authorization", format!("Bearer {}", response.token))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let user = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("token should authenticate");
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn extractor_rejects_missing_or_garbage_token() {
        use crate::auth::AuthUser;
        use axum::extract::FromRequestParts;

        let state = test_state();

        let request = axum::http::Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        assert_eq!(
            AuthUser::from_request_parts(&mut parts, &state)
                .await
                .unwrap_err(),
            StatusCode::UNAUTHORIZED
        );

        let request = axum::http::Request::builder()
            .uri("/")
            .header("authorization", "Bearer not-a-token")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        assert_eq!(
            AuthUser::from_request_parts(&mut parts, &state)
                .await
                .unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }
}
