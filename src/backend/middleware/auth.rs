/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. Extraction reads the
 * `Authorization: Bearer <token>` header, verifies the token and parses the
 * user id from its subject. Any failure rejects the request with
 * `ApiError::Unauthorized`; the caller is not told which step failed.
 *
 * Handlers that must answer differently when no identity is present take
 * `Option<AuthUser>` instead.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::ApiError;
use crate::backend::server::database::DbPool;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Axum extractor for the authenticated user
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.0.user_id
    }

    /// Load the acting user
    ///
    /// A valid token for a user that no longer exists is
    /// `ApiError::UserNotFound`.
    pub async fn load_user(&self, pool: &DbPool) -> Result<User, ApiError> {
        get_user_by_id(pool, self.user_id()).await?.ok_or_else(|| {
            tracing::warn!("Token subject {} has no user", self.user_id());
            ApiError::UserNotFound
        })
    }
}

/// Extract the raw token from a `Bearer` authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verify the request's bearer token
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthenticatedUser, ApiError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::Unauthorized
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::Unauthorized
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::Unauthorized
    })?;

    Ok(AuthenticatedUser { user_id })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = TokenService::from_ref(state);
        authenticate(&parts.headers, &tokens).map(AuthUser)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let tokens = TokenService::from_ref(state);
        Ok(authenticate(&parts.headers, &tokens).ok().map(AuthUser))
    }
}
