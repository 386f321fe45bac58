/**
 * Comment Service
 *
 * Binds the thread engine to the configured store and draws the transaction
 * boundary around every operation.
 *
 * # Backends
 *
 * - **Postgres**: each call opens a transaction; mutations commit on success
 *   and roll back when the store is dropped on an error path.
 * - **Memory**: each mutation runs against a staged copy of the arena while
 *   the store mutex is held; the copy replaces the arena only on success.
 */

use std::future::Future;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::backend::comments::db::PgCommentStore;
use crate::backend::comments::memory::MemoryCommentStore;
use crate::backend::comments::thread::{
    self, Comment, CommentDraft, CommentId, DeleteOutcome, EateryId, ThreadError,
};

/// Run `op` on a copy of `arena`; the copy replaces `arena` only on success
async fn staged<S, T, F, Fut>(arena: &mut S, op: F) -> Result<T, ThreadError>
where
    S: Clone,
    F: FnOnce(S) -> Fut,
    Fut: Future<Output = (S, Result<T, ThreadError>)>,
{
    let (copy, result) = op(arena.clone()).await;
    if result.is_ok() {
        *arena = copy;
    }
    result
}

#[derive(Clone)]
enum CommentBackend {
    Postgres(PgPool),
    Memory(Arc<Mutex<MemoryCommentStore>>),
}

/// Transactional entry point to the comment threads
#[derive(Clone)]
pub struct CommentService {
    backend: CommentBackend,
}

impl CommentService {
    /// Service backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            backend: CommentBackend::Postgres(pool),
        }
    }

    /// Service backed by an empty in-memory arena
    pub fn in_memory() -> Self {
        Self::with_memory_store(MemoryCommentStore::new())
    }

    /// Service backed by the given in-memory arena
    pub fn with_memory_store(store: MemoryCommentStore) -> Self {
        Self {
            backend: CommentBackend::Memory(Arc::new(Mutex::new(store))),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            CommentBackend::Postgres(_) => "postgres",
            CommentBackend::Memory(_) => "memory",
        }
    }

    /// Copy of the in-memory arena, `None` for the Postgres backend
    pub async fn memory_snapshot(&self) -> Option<MemoryCommentStore> {
        match &self.backend {
            CommentBackend::Postgres(_) => None,
            CommentBackend::Memory(store) => Some(store.lock().await.clone()),
        }
    }

    pub async fn create(&self, draft: CommentDraft) -> Result<Comment, ThreadError> {
        match &self.backend {
            CommentBackend::Postgres(pool) => {
                let mut store = PgCommentStore::begin(pool).await?;
                let comment = thread::create(&mut store, draft).await?;
                store.commit().await?;
                Ok(comment)
            }
            CommentBackend::Memory(store) => {
                let mut arena = store.lock().await;
                staged(&mut *arena, |mut copy| async move {
                    let result = thread::create(&mut copy, draft).await;
                    (copy, result)
                })
                .await
            }
        }
    }

    pub async fn list_by_eatery(&self, eatery_id: EateryId) -> Result<Vec<Comment>, ThreadError> {
        match &self.backend {
            CommentBackend::Postgres(pool) => {
                let mut store = PgCommentStore::begin(pool).await?;
                let comments = thread::list_by_eatery(&mut store, eatery_id).await?;
                Ok(comments)
            }
            CommentBackend::Memory(store) => {
                let mut arena = store.lock().await;
                let comments = thread::list_by_eatery(&mut *arena, eatery_id).await?;
                Ok(comments)
            }
        }
    }

    pub async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Comment>, ThreadError> {
        match &self.backend {
            CommentBackend::Postgres(pool) => {
                let mut store = PgCommentStore::begin(pool).await?;
                let comments = thread::list_by_author(&mut store, author_id).await?;
                Ok(comments)
            }
            CommentBackend::Memory(store) => {
                let mut arena = store.lock().await;
                let comments = thread::list_by_author(&mut *arena, author_id).await?;
                Ok(comments)
            }
        }
    }

    pub async fn update(&self, id: CommentId, content: String) -> Result<Comment, ThreadError> {
        match &self.backend {
            CommentBackend::Postgres(pool) => {
                let mut store = PgCommentStore::begin(pool).await?;
                let comment = thread::update(&mut store, id, content).await?;
                store.commit().await?;
                Ok(comment)
            }
            CommentBackend::Memory(store) => {
                let mut arena = store.lock().await;
                staged(&mut *arena, |mut copy| async move {
                    let result = thread::update(&mut copy, id, content).await;
                    (copy, result)
                })
                .await
            }
        }
    }

    pub async fn delete(&self, id: CommentId) -> Result<DeleteOutcome, ThreadError> {
        match &self.backend {
            CommentBackend::Postgres(pool) => {
                let mut store = PgCommentStore::begin(pool).await?;
                let outcome = thread::delete(&mut store, id).await?;
                store.commit().await?;
                Ok(outcome)
            }
            CommentBackend::Memory(store) => {
                let mut arena = store.lock().await;
                staged(&mut *arena, |mut copy| async move {
                    let result = thread::delete(&mut copy, id).await;
                    (copy, result)
                })
                .await
            }
        }
    }
}
