/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API.
 * Every handler returns `Result<_, ApiError>` and the error is converted
 * to an HTTP response by the `conversion` module.
 *
 * # Error Categories
 *
 * - Authentication: `Unauthenticated` (missing/invalid/expired token),
 *   `InvalidCredentials` (login failure)
 * - Authorization: `Forbidden` (authenticated but not the resource owner)
 * - Lookup: `NotFound` (referenced entity absent)
 * - Input: `BadRequest` (malformed input), `Conflict` (duplicate unique field)
 * - Collaborators: `UploadFailed` (image host rejected the upload)
 * - Everything else: `Database` / `Internal` (surfaced as a generic 500)
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Errors returned by API handlers
///
/// Each variant maps to a fixed HTTP status code via [`ApiError::status_code`].
/// The outward message is intentionally terse; internal detail (database
/// errors, collaborator responses) is logged server-side and never included
/// in the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or expired bearer token
    #[error("Missing or invalid token")]
    Unauthenticated,

    /// Login failed. Unknown email and wrong password produce this same
    /// variant so the response does not reveal which check failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated caller does not own the resource
    #[error("Unauthorized action")]
    Forbidden,

    /// Referenced entity does not exist. Carries the entity kind for the
    /// response body ("Post not found", "Comment not found", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A unique field (email) is already taken
    #[error("{0}")]
    Conflict(String),

    /// Request failed validation before reaching the store
    #[error("{0}")]
    BadRequest(String),

    /// The image host rejected or failed the upload
    #[error("Upload failed")]
    UploadFailed,

    /// Underlying store failure
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    /// Anything else unexpected (hashing, token encoding, ...)
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    ///
    /// `Conflict` and `InvalidCredentials` map to 400 rather than 409/401:
    /// that is the external contract for signup and login.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UploadFailed => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for the JSON response body
    ///
    /// For `Database` and `Internal` the display string is already generic;
    /// the underlying cause stays in the server logs only.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("Post").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Conflict("Email already registered".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UploadFailed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_names_entity() {
        assert_eq!(ApiError::NotFound("Post").message(), "Post not found");
        assert_eq!(ApiError::NotFound("Comment").message(), "Comment not found");
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        // Unknown email and wrong password must produce identical output
        let a = ApiError::InvalidCredentials;
        let b = ApiError::InvalidCredentials;
        assert_eq!(a.status_code(), b.status_code());
        assert_eq!(a.message(), b.message());
    }
}
