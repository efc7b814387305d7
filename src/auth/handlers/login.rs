/**
 * Login Handler
 *
 * Implements user authentication for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a JWT token
 *
 * # Security
 *
 * - Unknown email and wrong password both return the same
 *   `InvalidCredentials` response, so a caller cannot probe which emails
 *   are registered
 * - Password verification is constant-time (bcrypt)
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserSummary};
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Invalid credentials` - unknown email or wrong password
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("Password verification error: {e}")))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| ApiError::Internal(format!("Failed to create token: {e}")))?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}
