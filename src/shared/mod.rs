//! Shared Module
//!
//! This module contains types that are shared between the server and its
//! clients. All types are designed for serialization and transmission over
//! HTTP as JSON.

/// Comment thread request/response types
pub mod comment;

/// Review request/response types
pub mod review;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use comment::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};
pub use review::{CreateReviewRequest, ReviewImageResponse, ReviewResponse};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
