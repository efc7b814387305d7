/**
 * Authentication Handler Types
 *
 * Request and response types for the auth and profile endpoints. Each
 * operation has an explicit schema; nothing is passed through as loose JSON.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Sign up response
///
/// Signup does not log the user in; there is no token here.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    pub message: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against stored hash)
    pub password: String,
}

/// Login response: JWT token plus a minimal public user projection
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (1-hour expiration)
    pub token: String,
    pub user: UserSummary,
}

/// Minimal public user projection
///
/// Safe to embed anywhere a user is referenced. Never carries the
/// password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Full profile as returned by `GET /api/auth/me` and the profile updates
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            profile_picture: user.profile_pic,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Partial profile update request
///
/// Omitted fields are left unchanged, not cleared.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

/// Response for profile mutations
#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "wanderer".to_string(),
            email: "wanderer@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            bio: Some("always outside".to_string()),
            profile_pic: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_summary_omits_password_hash() {
        let user = sample_user();
        let summary = UserSummary::from(&user);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["username"], "wanderer");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_user_profile_uses_camel_case() {
        let profile = UserProfile::from(sample_user());
        let json = serde_json::to_value(&profile).unwrap();

        assert!(json.get("profilePicture").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("profile_pic").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_update_profile_request_partial() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"bio": "new bio"}"#).unwrap();
        assert_eq!(req.bio.as_deref(), Some("new bio"));
        assert!(req.username.is_none());
        assert!(req.email.is_none());
        assert!(req.profile_picture.is_none());
    }

    #[test]
    fn test_update_profile_request_camel_case_field() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"profilePicture": "https://img.example/p.png"}"#).unwrap();
        assert_eq!(
            req.profile_picture.as_deref(),
            Some("https://img.example/p.png")
        );
    }
}
