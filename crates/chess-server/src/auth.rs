//! Password hashing, JWT issuance, and the authenticated-caller extractor.
//!
//! The engine never sees credentials; authenticated move requests only
//! attach the caller's username to the move record.

use crate::AppState;
use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, StatusCode};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime, matching the original service's one-hour expiry.
const TOKEN_TTL_HOURS: i64 = 1;

/// Signing and verification keys derived from the shared secret.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// JWT claims: the user's id, username, and expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: usize,
}

/// Hashes a password with argon2 and a fresh salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verifies a password against a stored argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Issues a signed token for the given user.
pub fn issue_token(
    user_id: i64,
    username: &str,
    keys: &AuthKeys,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp,
    };
    jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &keys.encoding)
}

/// Verifies a token's signature and expiry and returns its claims.
pub fn verify_token(token: &str, keys: &AuthKeys) -> Result<Claims, jsonwebtoken::errors::Error> {
    jsonwebtoken::decode::<Claims>(token, &keys.decoding, &Validation::default())
        .map(|data| data.claims)
}

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header. Handlers that take this reject unauthenticated requests with
/// 401 before running.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let claims = verify_token(token, &state.auth).map_err(|_| StatusCode::UNAUTHORIZED)?;
        Ok(AuthUser {
            username: claims.username,
        })
    }
}
