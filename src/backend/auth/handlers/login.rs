/**
 * Login Handler
 *
 * POST /login
 *
 * # Authentication Process
 *
 * 1. Reject if email or password is missing
 * 2. Look up user by exact email
 * 3. Verify password using bcrypt
 * 4. Issue a JWT whose subject is the user id
 *
 * Every rejection is the same 401 `Bad username or password`.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::database::DbPool;

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@b.com", "password": "x" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(pool): State<DbPool>,
    State(tokens): State<TokenService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(request) = payload?;

    let (Some(email), Some(password)) = (request.email, request.password) else {
        tracing::warn!("Login request with missing credentials");
        return Err(ApiError::BadCredentials);
    };
    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&pool, &email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        ApiError::BadCredentials
    })?;

    if !verify_password(&password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::BadCredentials);
    }

    let access_token = tokens.issue(user.id)?;
    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { access_token }))
}
