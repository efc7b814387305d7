/**
 * Post Handlers
 *
 * HTTP handlers for the post endpoints:
 *
 * - `GET /api/posts` - list all posts (public)
 * - `POST /api/posts` - create a post, with optional weather enrichment
 * - `GET /api/posts/{id}` - single post with comments resolved (public)
 * - `PUT /api/posts/{id}` - merge fields, owner only
 * - `DELETE /api/posts/{id}` - delete, owner only
 * - `POST /api/posts/{id}/like` - toggle like membership
 *
 * Ownership checks always complete before any mutation is issued.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::comments::db::list_comments_for_post;
use crate::comments::types::CommentResponse;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::posts::db::{self, NewPost, PostChanges};
use crate::posts::types::{
    CreatePostRequest, PostDetailResponse, PostResponse, UpdatePostRequest,
};
use crate::posts::weather::WeatherSnapshot;
use crate::server::state::AppState;

/// Fetch a weather snapshot when both coordinates are present
///
/// Any enrichment failure is logged and swallowed; post creation never
/// fails because of the weather provider.
async fn enrich_weather(
    state: &AppState,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<WeatherSnapshot> {
    let (lat, lon) = match (latitude, longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return None,
    };

    let client = match &state.weather {
        Some(client) => client,
        None => {
            tracing::warn!("Weather enrichment disabled (no API key configured)");
            return None;
        }
    };

    match client.realtime(lat, lon).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("Weather enrichment unavailable: {}", e);
            None
        }
    }
}

/// Create a new post
///
/// The author is forced to the authenticated identity; nothing in the
/// request body can set it.
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    tracing::info!("Creating post '{}' for user {}", request.title, user.user_id);

    let weather = enrich_weather(&state, request.latitude, request.longitude).await;

    let post = db::create_post(
        &state.db,
        &NewPost {
            author_id: user.user_id,
            title: request.title,
            content: request.content,
            location: request.location,
            location_url: request.location_url,
            latitude: request.latitude,
            longitude: request.longitude,
            weather,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// List all posts with authors resolved
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = db::list_posts(&state.db).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Get one post with author and comments resolved
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostDetailResponse>, ApiError> {
    let post = db::get_post_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    let comments = list_comments_for_post(&state.db, id)
        .await?
        .into_iter()
        .map(CommentResponse::from)
        .collect();

    Ok(Json(PostDetailResponse::from_record(post, comments)))
}

/// Merge provided fields into an owned post
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    // Existence and ownership first; no mutation until both pass
    let author_id = db::get_post_author(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    if author_id != user.user_id {
        tracing::warn!("User {} tried to update post {} owned by {}", user.user_id, id, author_id);
        return Err(ApiError::Forbidden);
    }

    let post = db::update_post(
        &state.db,
        id,
        &PostChanges {
            title: request.title,
            content: request.content,
            location: request.location,
            location_url: request.location_url,
            latitude: request.latitude,
            longitude: request.longitude,
        },
    )
    .await?
    .ok_or(ApiError::NotFound("Post"))?;

    Ok(Json(PostResponse::from(post)))
}

/// Delete an owned post; its comments and likes go with it
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let author_id = db::get_post_author(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    if author_id != user.user_id {
        tracing::warn!("User {} tried to delete post {} owned by {}", user.user_id, id, author_id);
        return Err(ApiError::Forbidden);
    }

    if !db::delete_post(&state.db, id).await? {
        return Err(ApiError::NotFound("Post"));
    }

    tracing::info!("Post {} deleted by {}", id, user.user_id);

    Ok(Json(serde_json::json!({ "message": "Post deleted successfully" })))
}

/// Toggle the caller's membership in a post's like-set
pub async fn toggle_like(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    // Existence check up front; the toggle itself is atomic per post
    db::get_post_author(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    let liked = db::toggle_like(&state.db, id, user.user_id).await?;
    tracing::info!(
        "User {} {} post {}",
        user.user_id,
        if liked { "liked" } else { "unliked" },
        id
    );

    let post = db::get_post_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    Ok(Json(PostResponse::from(post)))
}
