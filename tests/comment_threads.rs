//! Comment thread scenarios through `CommentService`

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use eatery_reviews::backend::comments::{
    CommentDraft, CommentId, CommentService, DeleteOutcome, EateryId, ThreadError, DELETED_PLACEHOLDER,
};

fn draft(author_id: Uuid, eatery: i64, content: &str, parent_id: Option<CommentId>) -> CommentDraft {
    CommentDraft {
        author_id,
        eatery_id: EateryId(eatery),
        content: content.to_string(),
        parent_id,
    }
}

/// Root R with replies A and B: delete R, then A, then B
#[tokio::test]
async fn test_tombstoned_root_survives_until_last_reply_goes() {
    let service = CommentService::in_memory();
    let author = Uuid::new_v4();
    let root = service.create(draft(author, 1, "R", None)).await.unwrap();
    let a = service.create(draft(author, 1, "A", Some(root.id))).await.unwrap();
    let b = service.create(draft(author, 1, "B", Some(root.id))).await.unwrap();

    assert_eq!(service.delete(root.id).await.unwrap(), DeleteOutcome::Tombstoned);
    assert_eq!(service.delete(a.id).await.unwrap(), DeleteOutcome::Removed);

    let arena = service.memory_snapshot().await.unwrap();
    let tombstone = arena.get(root.id).unwrap();
    assert!(tombstone.deleted);
    assert_eq!(tombstone.content, DELETED_PLACEHOLDER);
    assert_eq!(tombstone.child_ids, vec![b.id]);

    assert_eq!(
        service.delete(b.id).await.unwrap(),
        DeleteOutcome::RemovedWithParent { parent_id: root.id }
    );
    assert!(service.memory_snapshot().await.unwrap().is_empty());
}

/// Live root keeps its place when its only reply is removed
#[tokio::test]
async fn test_live_parent_is_kept() {
    let service = CommentService::in_memory();
    let author = Uuid::new_v4();
    let root = service.create(draft(author, 1, "R", None)).await.unwrap();
    let reply = service.create(draft(author, 1, "A", Some(root.id))).await.unwrap();

    assert_eq!(service.delete(reply.id).await.unwrap(), DeleteOutcome::Removed);

    let arena = service.memory_snapshot().await.unwrap();
    assert_eq!(arena.len(), 1);
    let root_now = arena.get(root.id).unwrap();
    assert!(!root_now.deleted);
    assert_eq!(root_now.content, "R");
    assert!(root_now.child_ids.is_empty());
}

/// R ← P ← C with R and P tombstoned: deleting C removes P, keeps R
#[tokio::test]
async fn test_cascade_is_one_level() {
    let service = CommentService::in_memory();
    let author = Uuid::new_v4();
    let root = service.create(draft(author, 1, "R", None)).await.unwrap();
    let middle = service.create(draft(author, 1, "P", Some(root.id))).await.unwrap();
    let leaf = service.create(draft(author, 1, "C", Some(middle.id))).await.unwrap();

    service.delete(root.id).await.unwrap();
    service.delete(middle.id).await.unwrap();
    assert_eq!(
        service.delete(leaf.id).await.unwrap(),
        DeleteOutcome::RemovedWithParent { parent_id: middle.id }
    );

    let arena = service.memory_snapshot().await.unwrap();
    assert_eq!(arena.len(), 1);
    let root_now = arena.get(root.id).unwrap();
    assert!(root_now.deleted);
    assert!(root_now.child_ids.is_empty());
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let service = CommentService::in_memory();
    let author = Uuid::new_v4();

    assert_matches!(
        service.create(draft(author, 1, "orphan", Some(CommentId(1)))).await,
        Err(ThreadError::NotFound { id: CommentId(1) })
    );
    assert_matches!(service.update(CommentId(1), "x".to_string()).await, Err(ThreadError::NotFound { .. }));
    assert_matches!(service.delete(CommentId(1)).await, Err(ThreadError::NotFound { .. }));
    assert!(service.memory_snapshot().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_keeps_links_and_flags() {
    let service = CommentService::in_memory();
    let author = Uuid::new_v4();
    let root = service.create(draft(author, 1, "R", None)).await.unwrap();
    let reply = service.create(draft(author, 1, "A", Some(root.id))).await.unwrap();

    let updated = service.update(root.id, "R2".to_string()).await.unwrap();

    assert_eq!(updated.content, "R2");
    assert_eq!(updated.child_ids, vec![reply.id]);
    assert_eq!(updated.created_at, root.created_at);
    assert!(!updated.deleted);
}
