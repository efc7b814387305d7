/**
 * Signup Handler
 *
 * Implements user registration for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format, and password length
 * 2. Check that the email is not already registered
 * 3. Hash the password with bcrypt
 * 4. Create the user record
 *
 * Signup intentionally does not return a token; login is a separate step.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at DEFAULT_COST; the plaintext is
 *   never stored or logged
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub(crate) fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email, or password
/// * `400 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or store failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(ApiError::BadRequest(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores".to_string(),
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if email already exists
    if get_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    // Hash password
    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {e}")))?;

    let user = create_user(&state.db, request.username, request.email, password_hash).await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("abc"));
        assert!(is_valid_username("trail_runner42"));
        assert!(is_valid_username("Wanderer"));
    }

    #[test]
    fn test_too_short_or_long() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username(&"a".repeat(31)));
    }

    #[test]
    fn test_must_start_with_letter() {
        assert!(!is_valid_username("1abc"));
        assert!(!is_valid_username("_abc"));
    }

    #[test]
    fn test_rejects_special_characters() {
        assert!(!is_valid_username("user name"));
        assert!(!is_valid_username("user-name"));
        assert!(!is_valid_username("user@name"));
    }
}
