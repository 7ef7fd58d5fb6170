/**
 * API Error Types
 *
 * The error taxonomy of the service:
 *
 * - Authentication failures (missing, malformed, expired token)
 * - Bad credentials on login
 * - Not-found lookups by id
 * - Application errors with an arbitrary status and message
 * - Internal failures from the datastore, token signing or password hashing
 *
 * Internal failures keep their source for logging but present a generic
 * message to the caller.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// All errors a handler can return
///
/// # Usage
///
/// ```rust
/// use starwars_api::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::not_found("Planet not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
///
/// let err = ApiError::application(StatusCode::CONFLICT, "Already there");
/// assert_eq!(err.message(), "Already there");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, expired or otherwise invalid bearer token
    #[error("Missing or invalid token")]
    Unauthorized,

    /// Token is valid but its subject no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Login failed: missing field, unknown email or wrong password
    #[error("Bad username or password")]
    BadCredentials,

    /// Lookup by id found nothing
    #[error("{0}")]
    NotFound(String),

    /// Custom failure signalling with an explicit status
    #[error("{message}")]
    Application {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Datastore failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification failed (e.g. a corrupt stored hash)
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an application error with a status code
    pub fn application(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Application {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::UserNotFound | Self::BadCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Application { status, .. } => *status,
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller
    ///
    /// Internal failures all share [`INTERNAL_ERROR_MESSAGE`]; their details
    /// only go to the log.
    pub fn message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Whether this error comes from a failing collaborator rather than the request
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_)
        )
    }
}
