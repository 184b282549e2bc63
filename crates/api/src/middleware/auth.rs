//! The speaker principal behind every protected endpoint.
//!
//! Talks, revisions and submissions belong to the user who wrote them. The
//! principal carried by the access token is compared against that author;
//! a mismatch is reported as "not found" by the handlers, never as 403.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use symposium_core::error::CoreError;
use symposium_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in user, taken from the `sub` claim of a Bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl AuthUser {
    /// Whether the principal is the author/owner `owner_id`.
    pub fn owns(&self, owner_id: DbId) -> bool {
        self.user_id == owner_id
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}

/// The token part of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Sign in to manage talks and submissions"))?
        .to_str()
        .map_err(|_| unauthorized("Malformed Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| unauthorized("Expected a Bearer access token"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            unauthorized("Access token is invalid or has expired")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
