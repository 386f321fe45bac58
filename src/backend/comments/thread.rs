/**
 * Comment Thread Engine
 *
 * Comments form a forest per eatery. Each comment stores its parent id and
 * the ids of its direct replies; the store is the arena every id resolves
 * against, so no comment ever owns another.
 *
 * # Delete Policy
 *
 * - A comment with replies is tombstoned: `deleted` is set and its content is
 *   replaced by [`DELETED_PLACEHOLDER`]. Replies and links are untouched.
 * - A comment without replies is removed and unlinked from its parent. If
 *   that leaves a tombstoned parent without replies, the parent is removed in
 *   the same call. The check goes exactly one level up: a grandparent that
 *   becomes an empty tombstone this way is kept.
 *
 * Every function here runs against a single [`CommentStore`]; callers hand in
 * a transactional store so each operation commits or rolls back as a whole.
 */

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::comments::store::{CommentStore, StoreError};

/// Content shown in place of a tombstoned comment
pub const DELETED_PLACEHOLDER: &str = "This comment has been deleted.";

/// Numeric comment key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric eatery key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EateryId(pub i64);

impl fmt::Display for EateryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: Uuid,
    pub eatery_id: EateryId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
    pub parent_id: Option<CommentId>,
    /// Direct replies, in insertion order
    pub child_ids: Vec<CommentId>,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids.is_empty()
    }

    /// Copy with the content replaced
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self
        }
    }

    /// Copy marked deleted, content replaced by the placeholder
    pub fn tombstoned(self) -> Self {
        Self {
            deleted: true,
            content: DELETED_PLACEHOLDER.to_string(),
            ..self
        }
    }

    /// Copy with `child` appended to the reply list
    pub fn with_child(mut self, child: CommentId) -> Self {
        if !self.child_ids.contains(&child) {
            self.child_ids.push(child);
        }
        self
    }

    /// Copy with `child` dropped from the reply list
    pub fn without_child(mut self, child: CommentId) -> Self {
        self.child_ids.retain(|id| *id != child);
        self
    }
}

/// A comment that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author_id: Uuid,
    pub eatery_id: EateryId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub parent_id: Option<CommentId>,
}

/// Input of [`create`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub author_id: Uuid,
    pub eatery_id: EateryId,
    pub content: String,
    pub parent_id: Option<CommentId>,
}

/// What [`delete`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The comment had replies and was kept as a tombstone
    Tombstoned,
    /// The comment was removed
    Removed,
    /// The comment was removed together with its tombstoned parent
    RemovedWithParent { parent_id: CommentId },
}

/// Comment thread errors
#[derive(Debug, Error)]
pub enum ThreadError {
    /// A referenced comment id does not resolve
    #[error("comment {id} not found")]
    NotFound { id: CommentId },

    /// The store failed; nothing of the operation was committed
    #[error(transparent)]
    StoreFailure(#[from] StoreError),
}

async fn resolve<S: CommentStore + Send>(store: &mut S, id: CommentId) -> Result<Comment, ThreadError> {
    store.find_by_id(id).await?.ok_or(ThreadError::NotFound { id })
}

/// Create a comment, linking it under its parent when one is given
///
/// Fails with [`ThreadError::NotFound`] before writing anything if the parent
/// does not exist.
pub async fn create<S: CommentStore + Send>(store: &mut S, draft: CommentDraft) -> Result<Comment, ThreadError> {
    let parent = match draft.parent_id {
        Some(parent_id) => Some(resolve(store, parent_id).await?),
        None => None,
    };

    let comment = store
        .insert(NewComment {
            author_id: draft.author_id,
            eatery_id: draft.eatery_id,
            content: draft.content,
            created_at: Utc::now(),
            parent_id: draft.parent_id,
        })
        .await?;

    if let Some(parent) = parent {
        let parent_id = parent.id;
        store.save(parent.with_child(comment.id)).await?;
        tracing::debug!("Comment {} added as reply to {}", comment.id, parent_id);
    } else {
        tracing::debug!("Root comment {} added to eatery {}", comment.id, comment.eatery_id);
    }

    Ok(comment)
}

/// All comments of an eatery, newest first, tombstones included
pub async fn list_by_eatery<S: CommentStore + Send>(
    store: &mut S,
    eatery_id: EateryId,
) -> Result<Vec<Comment>, ThreadError> {
    Ok(store.find_by_eatery_order_by_created_desc(eatery_id).await?)
}

/// All comments written by a member, newest first, tombstones included
pub async fn list_by_author<S: CommentStore + Send>(
    store: &mut S,
    author_id: Uuid,
) -> Result<Vec<Comment>, ThreadError> {
    Ok(store.find_by_author_order_by_created_desc(author_id).await?)
}

/// Replace the content of a comment; every other field is kept
pub async fn update<S: CommentStore + Send>(
    store: &mut S,
    id: CommentId,
    content: String,
) -> Result<Comment, ThreadError> {
    let comment = resolve(store, id).await?;
    Ok(store.save(comment.with_content(content)).await?)
}

/// Delete a comment following the tombstone policy described above
pub async fn delete<S: CommentStore + Send>(store: &mut S, id: CommentId) -> Result<DeleteOutcome, ThreadError> {
    let comment = resolve(store, id).await?;

    if comment.has_children() {
        store.save(comment.tombstoned()).await?;
        tracing::debug!("Comment {} tombstoned", id);
        return Ok(DeleteOutcome::Tombstoned);
    }

    let mut orphaned_tombstone = None;
    if let Some(parent_id) = comment.parent_id {
        if let Some(parent) = store.find_by_id(parent_id).await? {
            let parent = parent.without_child(comment.id);
            if parent.deleted && !parent.has_children() {
                orphaned_tombstone = Some(parent);
            } else {
                store.save(parent).await?;
            }
        }
    }

    store.delete(&comment).await?;

    let Some(parent) = orphaned_tombstone else {
        tracing::debug!("Comment {} removed", id);
        return Ok(DeleteOutcome::Removed);
    };

    // Unlink only; the grandparent's own tombstone state is not re-examined.
    if let Some(grandparent_id) = parent.parent_id {
        if let Some(grandparent) = store.find_by_id(grandparent_id).await? {
            store.save(grandparent.without_child(parent.id)).await?;
        }
    }
    store.delete(&parent).await?;
    tracing::debug!("Comment {} removed with tombstoned parent {}", id, parent.id);

    Ok(DeleteOutcome::RemovedWithParent { parent_id: parent.id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::comments::memory::MemoryCommentStore;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn draft(author_id: Uuid, content: &str, parent_id: Option<CommentId>) -> CommentDraft {
        CommentDraft {
            author_id,
            eatery_id: EateryId(1),
            content: content.to_string(),
            parent_id,
        }
    }

    async fn fetch(store: &mut MemoryCommentStore, id: CommentId) -> Option<Comment> {
        store.find_by_id(id).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_root_comment() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();

        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();

        assert!(root.is_root());
        assert!(!root.deleted);
        assert_eq!(root.content, "Great food");
        assert_eq!(root.author_id, author);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_create_reply_links_both_ways() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();

        let reply = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();

        assert_eq!(reply.parent_id, Some(root.id));
        let root = fetch(&mut store, root.id).await.unwrap();
        assert_eq!(root.child_ids, vec![reply.id]);
    }

    #[tokio::test]
    async fn test_create_with_missing_parent_writes_nothing() {
        let mut store = MemoryCommentStore::new();

        let result = create(&mut store, draft(Uuid::new_v4(), "Orphan", Some(CommentId(42)))).await;

        assert_matches!(result, Err(ThreadError::NotFound { id: CommentId(42) }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_changes_only_content() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();
        let reply = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();
        let before = fetch(&mut store, root.id).await.unwrap();

        let updated = update(&mut store, root.id, "Great food, slow service".to_string()).await.unwrap();

        assert_eq!(updated.content, "Great food, slow service");
        assert_eq!(updated.clone().with_content(before.content.clone()), before);
        assert_eq!(updated.child_ids, vec![reply.id]);
    }

    #[tokio::test]
    async fn test_update_on_tombstone_keeps_deleted_flag() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();
        let reply = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();
        delete(&mut store, root.id).await.unwrap();

        let updated = update(&mut store, root.id, "edited".to_string()).await.unwrap();

        assert_eq!(updated.content, "edited");
        assert!(updated.deleted);
        assert_eq!(updated.child_ids, vec![reply.id]);
    }

    #[tokio::test]
    async fn test_update_missing_comment() {
        let mut store = MemoryCommentStore::new();
        let result = update(&mut store, CommentId(7), "text".to_string()).await;
        assert_matches!(result, Err(ThreadError::NotFound { id: CommentId(7) }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let mut store = MemoryCommentStore::new();
        let result = delete(&mut store, CommentId(3)).await;
        assert_matches!(result, Err(ThreadError::NotFound { id: CommentId(3) }));
    }

    #[tokio::test]
    async fn test_delete_leaf_reply_unlinks_from_parent() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();
        let reply = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();

        let outcome = delete(&mut store, reply.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Removed);
        assert!(fetch(&mut store, reply.id).await.is_none());
        let root_after = fetch(&mut store, root.id).await.unwrap();
        assert!(root_after.child_ids.is_empty());
        assert!(!root_after.deleted);
        assert_eq!(root_after.content, "Great food");
    }

    #[tokio::test]
    async fn test_delete_with_children_tombstones() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();
        let reply = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();

        let outcome = delete(&mut store, root.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Tombstoned);
        let root_after = fetch(&mut store, root.id).await.unwrap();
        assert!(root_after.deleted);
        assert_eq!(root_after.content, DELETED_PLACEHOLDER);
        assert_eq!(root_after.child_ids, vec![reply.id]);
        let reply_after = fetch(&mut store, reply.id).await.unwrap();
        assert_eq!(reply_after, reply);
    }

    #[tokio::test]
    async fn test_deleting_last_reply_of_tombstone_removes_both() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();
        let reply = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();
        delete(&mut store, root.id).await.unwrap();

        let outcome = delete(&mut store, reply.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::RemovedWithParent { parent_id: root.id });
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_tombstone_kept_while_other_replies_remain() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let root = create(&mut store, draft(author, "Great food", None)).await.unwrap();
        let first = create(&mut store, draft(author, "Agreed", Some(root.id))).await.unwrap();
        let second = create(&mut store, draft(author, "Me too", Some(root.id))).await.unwrap();
        delete(&mut store, root.id).await.unwrap();

        let outcome = delete(&mut store, first.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Removed);
        let root_after = fetch(&mut store, root.id).await.unwrap();
        assert!(root_after.deleted);
        assert_eq!(root_after.child_ids, vec![second.id]);
    }

    #[tokio::test]
    async fn test_cascade_stops_after_one_level() {
        let mut store = MemoryCommentStore::new();
        let author = Uuid::new_v4();
        let grandparent = create(&mut store, draft(author, "Top", None)).await.unwrap();
        let parent = create(&mut store, draft(author, "Middle", Some(grandparent.id))).await.unwrap();
        let child = create(&mut store, draft(author, "Bottom", Some(parent.id))).await.unwrap();
        delete(&mut store, grandparent.id).await.unwrap();
        delete(&mut store, parent.id).await.unwrap();

        let outcome = delete(&mut store, child.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::RemovedWithParent { parent_id: parent.id });
        let grandparent_after = fetch(&mut store, grandparent.id).await.unwrap();
        assert!(grandparent_after.deleted);
        assert!(grandparent_after.child_ids.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let mut store = MemoryCommentStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let first = create(&mut store, draft(alice, "first", None)).await.unwrap();
        let second = create(&mut store, draft(bob, "second", Some(first.id))).await.unwrap();
        let third = create(&mut store, draft(alice, "third", None)).await.unwrap();

        let by_eatery: Vec<_> = list_by_eatery(&mut store, EateryId(1)).await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(by_eatery, vec![third.id, second.id, first.id]);

        let by_alice: Vec<_> = list_by_author(&mut store, alice).await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(by_alice, vec![third.id, first.id]);

        assert!(list_by_eatery(&mut store, EateryId(2)).await.unwrap().is_empty());
    }
}
