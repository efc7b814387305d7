/**
 * Authentication Gateway
 *
 * This module protects routes that require a logged-in caller. The
 * `AuthUser` extractor reads the bearer token from the Authorization
 * header, verifies it against the token keys in application state, and
 * hands the verified user ID to the handler.
 *
 * Adding `AuthUser` as a handler parameter is the only thing a protected
 * route has to do; requests with a missing, malformed, or expired token are
 * rejected with 401 before the handler body runs. Ownership checks
 * (is this caller the author of the post?) are separate and live in the
 * individual operations.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::auth::sessions::TokenKeys;
use crate::error::ApiError;

/// Verified identity of the calling user
///
/// Constructed only by successful token verification, so a handler holding
/// one of these knows the caller is authenticated.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthUser
where
    TokenKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Get Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::Unauthenticated
            })?;

        // Extract token (format: "Bearer <token>")
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Malformed Authorization header");
            ApiError::Unauthenticated
        })?;

        // Verify token
        let keys = TokenKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            tracing::warn!("Token verification failed: {:?}", e);
            ApiError::Unauthenticated
        })?;

        // Parse user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::error!("Invalid user ID in token subject: {:?}", e);
            ApiError::Unauthenticated
        })?;

        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn keys() -> TokenKeys {
        TokenKeys::new("gateway-test-secret")
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("http://localhost/api/posts");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let keys = keys();
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id).unwrap();

        let mut parts = parts_with_auth(Some(&format!("Bearer {}", token)));
        let user = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[tokio::test]
    async fn test_missing_header() {
        let mut parts = parts_with_auth(None);
        let result = AuthUser::from_request_parts(&mut parts, &keys()).await;
        assert!(matches!(result.unwrap_err(), ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_missing_bearer_scheme() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4()).unwrap();

        // Raw token without the scheme prefix is rejected
        let mut parts = parts_with_auth(Some(&token));
        let result = AuthUser::from_request_parts(&mut parts, &keys).await;
        assert!(matches!(result.unwrap_err(), ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_tampered_token() {
        let keys = keys();
        let token = TokenKeys::new("some-other-secret")
            .issue(Uuid::new_v4())
            .unwrap();

        let mut parts = parts_with_auth(Some(&format!("Bearer {}", token)));
        let result = AuthUser::from_request_parts(&mut parts, &keys).await;
        assert!(matches!(result.unwrap_err(), ApiError::Unauthenticated));
    }
}
