//! Comment thread request/response types
//!
//! Wire types for the `/api/comments` endpoints. Comment and eatery ids are
//! numeric, member ids are UUIDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// Request body for `POST /api/comments`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommentRequest {
    pub eatery_id: i64,
    pub content: String,
    /// Comment this one replies to; `None` for a root comment
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_content(&self.content)
    }
}

/// Request body for `PUT /api/comments/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCommentRequest {
    pub content: String,
}

impl UpdateCommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_content(&self.content)
    }
}

fn validate_content(content: &str) -> Result<(), SharedError> {
    if content.trim().is_empty() {
        return Err(SharedError::validation("content", "Comment content cannot be empty"));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(SharedError::validation(
            "content",
            format!("Comment content cannot exceed {} characters", MAX_COMMENT_LENGTH),
        ));
    }
    Ok(())
}

/// A comment as returned by the API
///
/// Tombstoned comments are included with `deleted = true` and the
/// placeholder content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentResponse {
    pub id: i64,
    pub member_id: Uuid,
    pub eatery_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
    pub parent_id: Option<i64>,
    pub child_ids: Vec<i64>,
}
