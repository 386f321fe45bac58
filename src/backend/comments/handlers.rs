//! Comment HTTP Handlers
//!
//! - `POST /api/comments` - create (author is the authenticated member)
//! - `GET /api/comments/eatery/{eatery_id}` - list an eatery's comments
//! - `GET /api/comments/member/{member_id}` - list a member's comments
//! - `PUT /api/comments/{id}` - replace content
//! - `DELETE /api/comments/{id}` - delete (tombstone or remove)
//!
//! Updating a comment does not check that the caller wrote it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::backend::comments::service::CommentService;
use crate::backend::comments::thread::{Comment, CommentDraft, CommentId, EateryId};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::comment::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.0,
            member_id: comment.author_id,
            eatery_id: comment.eatery_id.0,
            content: comment.content,
            created_at: comment.created_at,
            deleted: comment.deleted,
            parent_id: comment.parent_id.map(|id| id.0),
            child_ids: comment.child_ids.into_iter().map(|id| id.0).collect(),
        }
    }
}

fn into_responses(comments: Vec<Comment>) -> Vec<CommentResponse> {
    comments.into_iter().map(CommentResponse::from).collect()
}

pub async fn create_comment(
    State(comments): State<CommentService>,
    AuthUser(member): AuthUser,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), BackendError> {
    request.validate()?;

    let comment = comments
        .create(CommentDraft {
            author_id: member.member_id,
            eatery_id: EateryId(request.eatery_id),
            content: request.content,
            parent_id: request.parent_id.map(CommentId),
        })
        .await?;

    tracing::info!("Member {} commented {} on eatery {}", member.member_id, comment.id, comment.eatery_id);
    Ok((StatusCode::CREATED, Json(comment.into())))
}

pub async fn list_comments_by_eatery(
    State(comments): State<CommentService>,
    Path(eatery_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, BackendError> {
    let found = comments.list_by_eatery(EateryId(eatery_id)).await?;
    Ok(Json(into_responses(found)))
}

pub async fn list_comments_by_member(
    State(comments): State<CommentService>,
    AuthUser(_member): AuthUser,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Vec<CommentResponse>>, BackendError> {
    let found = comments.list_by_author(member_id).await?;
    Ok(Json(into_responses(found)))
}

pub async fn update_comment(
    State(comments): State<CommentService>,
    AuthUser(member): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, BackendError> {
    request.validate()?;

    let comment = comments.update(CommentId(id), request.content).await?;
    if comment.author_id != member.member_id {
        tracing::warn!("Comment {} edited by member {} who is not its author", id, member.member_id);
    }
    Ok(Json(comment.into()))
}

pub async fn delete_comment(
    State(comments): State<CommentService>,
    AuthUser(member): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    let outcome = comments.delete(CommentId(id)).await?;
    tracing::info!("Member {} deleted comment {}: {:?}", member.member_id, id, outcome);
    Ok(StatusCode::NO_CONTENT)
}
