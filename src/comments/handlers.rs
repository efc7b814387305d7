/**
 * Comment Handlers
 *
 * - `POST /api/comments` - create a comment on a post
 * - `GET /api/comments/{postId}` - list a post's comments (public)
 * - `DELETE /api/comments/{id}` - delete own comment
 *
 * Deletion checks existence and authorship before touching anything; the
 * ordering is deliberate and fixed.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::comments::db;
use crate::comments::types::{CommentResponse, CreateCommentRequest};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// Create a comment
///
/// 404 when the parent post does not exist; the store reports that from the
/// same statement that would append the comment, so there is no window where
/// a comment lands on a vanished post.
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Comment text is required".to_string()));
    }

    let comment = db::create_comment(&state.db, request.post_id, user.user_id, &request.text)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    tracing::info!("User {} commented on post {}", user.user_id, request.post_id);

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// List comments for a post, oldest first
///
/// An unknown post id yields an empty list, not a 404.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let comments = db::list_comments_for_post(&state.db, post_id).await?;
    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

/// Delete own comment
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // All checks before any mutation
    let comment = db::get_comment_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Comment"))?;

    if comment.author_id != user.user_id {
        tracing::warn!(
            "User {} tried to delete comment {} owned by {}",
            user.user_id,
            id,
            comment.author_id
        );
        return Err(ApiError::Forbidden);
    }

    if !db::delete_comment(&state.db, id).await? {
        return Err(ApiError::NotFound("Comment"));
    }

    tracing::info!("Comment {} deleted by {}", id, user.user_id);

    Ok(Json(serde_json::json!({ "message": "Comment deleted successfully" })))
}
