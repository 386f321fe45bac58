/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised directly by handlers with an explicit status:
 * - Bad credentials (401)
 * - Missing member or review (404)
 * - Duplicate e-mail (409)
 * - Deleting someone else's review (403)
 *
 * ## Wrapped Errors
 *
 * - `SharedError` - request validation (400)
 * - `ThreadError` - comment engine (404 for unknown ids, 500 for storage)
 * - `sqlx::Error` - direct database access (500)
 * - `TokenError` - token encoding/verification (401)
 * - `bcrypt::BcryptError` - password hashing (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::comments::ThreadError;
use crate::shared::SharedError;

/// Handler-facing error, converted to a JSON response
///
/// ```rust
/// use eatery_reviews::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::CONFLICT, "Email already registered");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error raised by a handler with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The route needs a database and none is configured
    #[error("Database not configured")]
    ServiceUnavailable,

    /// Request validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Comment thread error
    #[error(transparent)]
    Thread(#[from] ThreadError),

    /// Direct database access error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token could not be issued or verified
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ServiceUnavailable` - 503 Service Unavailable
    /// - `SharedError` - 400 Bad Request
    /// - `Thread` - 404 for unknown comments, 500 for storage failures
    /// - `Database` / `Hashing` - 500 Internal Server Error
    /// - `Token` - 401 Unauthorized
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Thread(ThreadError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Thread(ThreadError::StoreFailure(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) | Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get the message sent to the client
    ///
    /// Internal failures are reported generically; the detail only goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::ServiceUnavailable => self.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::Thread(err @ ThreadError::NotFound { .. }) => err.to_string(),
            Self::Token(_) => "Invalid or expired token".to_string(),
            Self::Thread(ThreadError::StoreFailure(_)) | Self::Database(_) | Self::Hashing(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
