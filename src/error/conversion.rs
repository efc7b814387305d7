/**
 * Error Conversion
 *
 * This module converts `ApiError` into HTTP responses so handlers can
 * return it directly with `?`.
 *
 * # Response Format
 *
 * Error responses are JSON:
 * ```json
 * {
 *   "error": "Post not found"
 * }
 * ```
 */

use axum::{
    response::{Response, IntoResponse},
    Json,
};
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Server-side failures are logged with their full detail here, at the
    /// single point where they leave the application; the response body only
    /// carries the generic message.
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
            }
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
            }
            ApiError::UploadFailed => {
                tracing::error!("Image upload failed");
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({
            "error": self.message(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound("Post").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_unauthenticated() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_into_response_body_shape() {
        let response = ApiError::BadRequest("No file uploaded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_internal_detail_never_leaks() {
        let response =
            ApiError::Internal("bcrypt cost parameter rejected".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("bcrypt"));
        assert!(body.contains("Internal server error"));
    }
}
