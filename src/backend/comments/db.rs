//! PostgreSQL comment store
//!
//! Every `PgCommentStore` wraps one database transaction. Reply lists are not
//! stored as such: a comment's replies are the rows whose `parent_id` points
//! at it, so `save` only writes the comment's own columns.
//!
//! `find_by_id` locks the row (`FOR UPDATE`) before reading its replies. Two
//! transactions deleting the last replies of one tombstone therefore queue on
//! the tombstone's row, and the second one sees the first one's delete.

use std::collections::HashMap;
use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::backend::comments::store::{CommentStore, StoreError};
use crate::backend::comments::thread::{Comment, CommentId, EateryId, NewComment};

#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: i64,
    member_id: Uuid,
    eatery_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    deleted: bool,
    parent_id: Option<i64>,
}

impl CommentRow {
    fn into_comment(self, child_ids: Vec<CommentId>) -> Comment {
        Comment {
            id: CommentId(self.id),
            author_id: self.member_id,
            eatery_id: EateryId(self.eatery_id),
            content: self.content,
            created_at: self.created_at,
            deleted: self.deleted,
            parent_id: self.parent_id.map(CommentId),
            child_ids,
        }
    }
}

/// Comment store bound to a single PostgreSQL transaction
///
/// Dropping the store without calling [`PgCommentStore::commit`] rolls the
/// transaction back.
pub struct PgCommentStore {
    tx: Transaction<'static, Postgres>,
}

impl PgCommentStore {
    /// Open a transaction on the pool
    pub async fn begin(pool: &PgPool) -> Result<Self, StoreError> {
        Ok(Self { tx: pool.begin().await? })
    }

    /// Commit everything written through this store
    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn child_ids(&mut self, id: i64) -> Result<Vec<CommentId>, StoreError> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM comments WHERE parent_id = $1 ORDER BY id")
            .bind(id)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(ids.into_iter().map(CommentId).collect())
    }

    /// Attach reply ids to a batch of rows with one query
    async fn with_children(&mut self, rows: Vec<CommentRow>) -> Result<Vec<Comment>, StoreError> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let links: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT parent_id, id FROM comments WHERE parent_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(&mut *self.tx)
        .await?;

        let mut children: HashMap<i64, Vec<CommentId>> = HashMap::new();
        for (parent_id, id) in links {
            children.entry(parent_id).or_default().push(CommentId(id));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let child_ids = children.remove(&row.id).unwrap_or_default();
                row.into_comment(child_ids)
            })
            .collect())
    }
}

impl CommentStore for PgCommentStore {
    fn find_by_id(&mut self, id: CommentId) -> impl Future<Output = Result<Option<Comment>, StoreError>> + Send {
        async move {
            let row = sqlx::query_as::<_, CommentRow>(
                r#"
                SELECT id, member_id, eatery_id, content, created_at, deleted, parent_id
                FROM comments
                WHERE id = $1
                FOR UPDATE
                "#,
            )
            .bind(id.0)
            .fetch_optional(&mut *self.tx)
            .await?;

            match row {
                Some(row) => {
                    let child_ids = self.child_ids(row.id).await?;
                    Ok(Some(row.into_comment(child_ids)))
                }
                None => Ok(None),
            }
        }
    }

    fn insert(&mut self, comment: NewComment) -> impl Future<Output = Result<Comment, StoreError>> + Send {
        async move {
            let row = sqlx::query_as::<_, CommentRow>(
                r#"
                INSERT INTO comments (member_id, eatery_id, content, created_at, deleted, parent_id)
                VALUES ($1, $2, $3, $4, false, $5)
                RETURNING id, member_id, eatery_id, content, created_at, deleted, parent_id
                "#,
            )
            .bind(comment.author_id)
            .bind(comment.eatery_id.0)
            .bind(&comment.content)
            .bind(comment.created_at)
            .bind(comment.parent_id.map(|id| id.0))
            .fetch_one(&mut *self.tx)
            .await?;

            Ok(row.into_comment(Vec::new()))
        }
    }

    fn save(&mut self, comment: Comment) -> impl Future<Output = Result<Comment, StoreError>> + Send {
        async move {
            sqlx::query("UPDATE comments SET content = $1, deleted = $2 WHERE id = $3")
                .bind(&comment.content)
                .bind(comment.deleted)
                .bind(comment.id.0)
                .execute(&mut *self.tx)
                .await?;
            Ok(comment)
        }
    }

    fn delete(&mut self, comment: &Comment) -> impl Future<Output = Result<(), StoreError>> + Send {
        let id = comment.id.0;
        async move {
            sqlx::query("DELETE FROM comments WHERE id = $1")
                .bind(id)
                .execute(&mut *self.tx)
                .await?;
            Ok(())
        }
    }

    fn find_by_eatery_order_by_created_desc(
        &mut self,
        eatery_id: EateryId,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send {
        async move {
            let rows = sqlx::query_as::<_, CommentRow>(
                r#"
                SELECT id, member_id, eatery_id, content, created_at, deleted, parent_id
                FROM comments
                WHERE eatery_id = $1
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .bind(eatery_id.0)
            .fetch_all(&mut *self.tx)
            .await?;
            self.with_children(rows).await
        }
    }

    fn find_by_author_order_by_created_desc(
        &mut self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send {
        async move {
            let rows = sqlx::query_as::<_, CommentRow>(
                r#"
                SELECT id, member_id, eatery_id, content, created_at, deleted, parent_id
                FROM comments
                WHERE member_id = $1
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .bind(author_id)
            .fetch_all(&mut *self.tx)
            .await?;
            self.with_children(rows).await
        }
    }
}
