//! Comment store contract
//!
//! The thread engine only talks to storage through [`CommentStore`]. An
//! implementation is expected to be one unit of work: everything written
//! through a single value becomes visible together or not at all.

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::backend::comments::thread::{Comment, CommentId, EateryId, NewComment};

/// Persistence failure, passed through to the caller unchanged
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations the comment thread engine relies on
pub trait CommentStore {
    /// Look a comment up by id, with its reply ids
    fn find_by_id(&mut self, id: CommentId) -> impl Future<Output = Result<Option<Comment>, StoreError>> + Send;

    /// Store a new comment and return it with its assigned id
    fn insert(&mut self, comment: NewComment) -> impl Future<Output = Result<Comment, StoreError>> + Send;

    /// Persist an existing comment (content, deleted flag, reply list)
    fn save(&mut self, comment: Comment) -> impl Future<Output = Result<Comment, StoreError>> + Send;

    /// Physically remove a comment
    fn delete(&mut self, comment: &Comment) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn find_by_eatery_order_by_created_desc(
        &mut self,
        eatery_id: EateryId,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send;

    fn find_by_author_order_by_created_desc(
        &mut self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send;
}
