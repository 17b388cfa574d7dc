//! # Authentication Module
//!
//! Session authentication for the PharmSched API: argon2 password hashing,
//! signed session tokens carried in a cookie, the [`Actor`] extractor that
//! resolves the account behind a request, and the [`gate`] helper that joins
//! the extracted actor with the access policy.
//!
//! Extraction never rejects a request. A missing, expired, or forged session
//! simply resolves to [`Actor::Anonymous`]; the policy gate then decides
//! whether that is enough for the requested action.

use std::sync::Arc;

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use eyre::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pharmsched_core::errors::SchedError;
use pharmsched_core::policy::{self, Action, Decision, Role};

use crate::ApiState;
use crate::middleware::error_handling::AppError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Hashes a password using the Argon2 algorithm
///
/// A fresh random salt is generated per password and the result is returned
/// in PHC string format, ready for storage.
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored PHC-format hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;

    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    exp: usize,
}

/// Mints a signed session token for `user_id`, valid for seven days.
pub fn mint_session_token(secret: &str, user_id: Uuid) -> Result<String> {
    let exp = (Utc::now() + Duration::days(7)).timestamp() as usize;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre::eyre!("Error signing session token: {}", e))?;

    Ok(token)
}

/// Verifies a session token and returns the user id it was minted for.
pub fn verify_session_token(secret: &str, token: &str) -> Option<Uuid> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .ok()?;

    Uuid::parse_str(&data.claims.sub).ok()
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Set-Cookie value clearing the session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// An authenticated account with its derived role.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

/// The entity issuing the current request.
#[derive(Debug, Clone)]
pub enum Actor {
    Anonymous,
    User(AuthenticatedUser),
}

impl Actor {
    pub fn role(&self) -> Role {
        match self {
            Actor::Anonymous => Role::Anonymous,
            Actor::User(user) => user.role,
        }
    }
}

fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    let cookies = parts.headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for Actor {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        // Requests without a session cookie never touch the store.
        let Some(token) = cookie_value(parts, SESSION_COOKIE) else {
            return Ok(Actor::Anonymous);
        };
        let Some(user_id) = verify_session_token(&state.session_secret, &token) else {
            return Ok(Actor::Anonymous);
        };

        let user = match pharmsched_db::repositories::user::get_user_by_id(&state.db_pool, user_id)
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(Actor::Anonymous),
            Err(e) => {
                tracing::warn!("Failed to load session user {}: {}", user_id, e);
                return Ok(Actor::Anonymous);
            }
        };

        let role = if user.is_superuser {
            Role::Superuser
        } else {
            match pharmsched_db::repositories::user::user_has_permission(
                &state.db_pool,
                user.id,
                policy::VIEW_SCHEDULE,
            )
            .await
            {
                Ok(true) => Role::Permissioned,
                Ok(false) => Role::Authenticated,
                Err(e) => {
                    tracing::warn!("Failed to load permissions for user {}: {}", user.id, e);
                    Role::Authenticated
                }
            }
        };

        Ok(Actor::User(AuthenticatedUser {
            id: user.id,
            username: user.username,
            role,
        }))
    }
}

/// Resolves the access decision for `actor` attempting `action`.
///
/// Anonymous actors are sent to the login form with `next` set to the path
/// they asked for; authenticated actors failing the policy get a 403. Both
/// travel through the error channel so handlers can gate with `?` before
/// touching the store.
pub fn gate<'a>(
    actor: &'a Actor,
    action: Action,
    next: &str,
) -> Result<&'a AuthenticatedUser, AppError> {
    match actor {
        Actor::Anonymous => Err(AppError(SchedError::LoginRequired {
            next: next.to_string(),
        })),
        Actor::User(user) => match policy::authorize(user.role, action) {
            Decision::Allow => Ok(user),
            Decision::Deny => Err(AppError(SchedError::Authorization(format!(
                "{:?} requires additional privileges",
                action
            )))),
        },
    }
}
