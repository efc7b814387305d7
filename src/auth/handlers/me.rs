/**
 * Get Current User Handler
 *
 * Implements GET /api/auth/me: the full profile of the authenticated
 * caller, minus the password hash.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserProfile;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// Current user handler
///
/// A valid token does not guarantee the record still exists; a user
/// deleted after token issuance yields 404 here.
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let record = get_user_by_id(&state.db, user.user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(UserProfile::from(record)))
}
