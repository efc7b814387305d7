/**
 * Update Profile Handler
 *
 * Implements PUT /api/auth/update-profile: a partial update where each
 * provided field overwrites the stored value and omitted fields are left
 * unchanged.
 *
 * Email uniqueness is not re-checked here; the unique constraint on the
 * users table is the only guard, and a violation surfaces as a 500.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ProfileResponse, UpdateProfileRequest, UserProfile};
use crate::auth::users::{self, ProfileUpdate};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// Update profile handler
///
/// # Errors
///
/// * `404 Not Found` - the authenticated user's record no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    tracing::info!("Profile update for user {}", user.user_id);

    let changes = ProfileUpdate {
        username: request.username,
        email: request.email,
        bio: request.bio,
        profile_pic: request.profile_picture,
    };

    let updated = users::update_profile(&state.db, user.user_id, &changes)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(ProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: UserProfile::from(updated),
    }))
}
