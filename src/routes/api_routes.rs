/**
 * API Route Table
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - user registration
 * - `POST /api/auth/login` - user login
 * - `GET /api/auth/me` - current user (auth)
 * - `PUT /api/auth/update-profile` - partial profile update (auth)
 *
 * ## Posts
 * - `GET /api/posts` - list posts
 * - `POST /api/posts` - create post (auth)
 * - `GET /api/posts/{id}` - single post with comments
 * - `PUT /api/posts/{id}` - update post (auth, owner)
 * - `DELETE /api/posts/{id}` - delete post (auth, owner)
 * - `POST /api/posts/{id}/like` - toggle like (auth)
 *
 * ## Comments
 * - `POST /api/comments` - create comment (auth)
 * - `GET /api/comments/{id}` - list comments; the id is the *post* id
 * - `DELETE /api/comments/{id}` - delete comment (auth, author)
 *
 * ## Profile
 * - `POST /api/profile/upload` - profile picture upload (auth, multipart)
 *
 * Protected handlers take the `AuthUser` extractor; there is no separate
 * per-route wiring to forget.
 */

use axum::routing::{get, post, put};
use axum::Router;

use crate::auth::{get_me, login, signup, update_profile};
use crate::comments::{create_comment, delete_comment, list_comments};
use crate::posts::{create_post, delete_post, get_post, list_posts, toggle_like, update_post};
use crate::profile::upload_profile_picture;
use crate::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/update-profile", put(update_profile))
        // Post endpoints
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/api/posts/{id}/like", post(toggle_like))
        // Comment endpoints (GET interprets the id as the parent post id)
        .route("/api/comments", post(create_comment))
        .route(
            "/api/comments/{id}",
            get(list_comments).delete(delete_comment),
        )
        // Profile endpoints
        .route("/api/profile/upload", post(upload_profile_picture))
}
