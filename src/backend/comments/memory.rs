//! In-memory comment store
//!
//! An arena of comments keyed by id. Used when the server runs without a
//! database and as the reference store in tests. The store is `Clone`, so a
//! transaction is a staged copy that replaces the live arena on success (see
//! `CommentService`).

use std::collections::BTreeMap;
use std::future::Future;

use uuid::Uuid;

use crate::backend::comments::store::{CommentStore, StoreError};
use crate::backend::comments::thread::{Comment, CommentId, EateryId, NewComment};

#[derive(Debug, Clone, Default)]
pub struct MemoryCommentStore {
    comments: BTreeMap<CommentId, Comment>,
    last_id: i64,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.get(&id)
    }

    /// Every stored comment, in id order
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.values()
    }

    fn newest_first<'a>(&self, comments: impl Iterator<Item = &'a Comment>) -> Vec<Comment> {
        let mut found: Vec<Comment> = comments.cloned().collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        found
    }
}

impl CommentStore for MemoryCommentStore {
    fn find_by_id(&mut self, id: CommentId) -> impl Future<Output = Result<Option<Comment>, StoreError>> + Send {
        let found = self.comments.get(&id).cloned();
        async move { Ok(found) }
    }

    fn insert(&mut self, comment: NewComment) -> impl Future<Output = Result<Comment, StoreError>> + Send {
        self.last_id += 1;
        let stored = Comment {
            id: CommentId(self.last_id),
            author_id: comment.author_id,
            eatery_id: comment.eatery_id,
            content: comment.content,
            created_at: comment.created_at,
            deleted: false,
            parent_id: comment.parent_id,
            child_ids: Vec::new(),
        };
        self.comments.insert(stored.id, stored.clone());
        async move { Ok(stored) }
    }

    fn save(&mut self, comment: Comment) -> impl Future<Output = Result<Comment, StoreError>> + Send {
        self.comments.insert(comment.id, comment.clone());
        async move { Ok(comment) }
    }

    fn delete(&mut self, comment: &Comment) -> impl Future<Output = Result<(), StoreError>> + Send {
        self.comments.remove(&comment.id);
        async move { Ok(()) }
    }

    fn find_by_eatery_order_by_created_desc(
        &mut self,
        eatery_id: EateryId,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send {
        let found = self.newest_first(self.comments.values().filter(|c| c.eatery_id == eatery_id));
        async move { Ok(found) }
    }

    fn find_by_author_order_by_created_desc(
        &mut self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send {
        let found = self.newest_first(self.comments.values().filter(|c| c.author_id == author_id));
        async move { Ok(found) }
    }
}
