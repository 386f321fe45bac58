//! Shared Error Types
//!
//! Errors raised while validating the request types in `shared`. The backend
//! wraps them in `BackendError` and answers 400.
//!
//! # Usage
//!
//! ```rust
//! use eatery_reviews::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "Comment content cannot be empty");
//! ```
use thiserror::Error;

/// Errors raised by the shared request/response types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Request field validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
