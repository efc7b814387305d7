/**
 * Profile Picture Upload Handler
 *
 * Implements POST /api/profile/upload (multipart, field name `image`).
 *
 * The user record is only touched after the image host has accepted the
 * upload and returned a URL; a failed upload never leaves a half-updated
 * profile.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::Serialize;

use crate::auth::handlers::types::UserProfile;
use crate::auth::users::set_profile_pic;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// Upload response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    pub profile_pic: String,
    pub user: UserProfile,
}

/// Upload profile picture handler
///
/// # Errors
///
/// * `400 Bad Request` - no `image` field, or empty file data
/// * `404 Not Found` - user record vanished after token issuance
/// * `500 Upload failed` - image host unavailable or rejected the upload
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResult>, ApiError> {
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Malformed multipart body".to_string()))?
    {
        if field.name() == Some("image") {
            let filename = field
                .file_name()
                .unwrap_or("profile-picture")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ApiError::BadRequest("Malformed multipart body".to_string()))?;
            image = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) = match image {
        Some((_, ref b)) if b.is_empty() => {
            return Err(ApiError::BadRequest("No file uploaded".to_string()))
        }
        Some(pair) => pair,
        None => return Err(ApiError::BadRequest("No file uploaded".to_string())),
    };

    tracing::info!(
        "Uploading profile picture for user {} ({} bytes)",
        user.user_id,
        bytes.len()
    );

    let images = state.images.as_ref().ok_or_else(|| {
        tracing::error!("Image host not configured");
        ApiError::UploadFailed
    })?;

    let url = images.upload(bytes, filename).await.map_err(|e| {
        tracing::warn!("Profile picture upload failed: {}", e);
        ApiError::UploadFailed
    })?;

    // Only now, with a durable URL in hand, touch the user record
    let updated = set_profile_pic(&state.db, user.user_id, &url)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(UploadResult {
        success: true,
        profile_pic: url,
        user: UserProfile::from(updated),
    }))
}
