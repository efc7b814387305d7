/**
 * User Model and Database Operations
 *
 * This module handles user records: creation at signup, lookups for login
 * and token-verified requests, and profile updates.
 *
 * The `password_hash` column never leaves this layer in a response; handlers
 * project `User` into response types that omit it.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User row as stored in the database
///
/// Deliberately not `Serialize`: responses are built from explicit
/// projections so the password hash cannot leak by accident.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub username: String,
    /// Email address (unique, stored case-sensitively)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Optional free-form bio
    pub bio: Option<String>,
    /// Optional profile picture URL (set by the upload flow)
    pub profile_pic: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update
///
/// `None` fields are left unchanged; there is no way to clear a field
/// through this operation.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, bio, profile_pic, created_at, updated_at";

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `email` - User email
/// * `password_hash` - Hashed password (never the plaintext)
pub async fn create_user(
    pool: &PgPool,
    username: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email, or `None` if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        WHERE email = $1
        "#
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID, or `None` if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Apply a partial profile update
///
/// Provided fields overwrite the stored values; omitted fields keep their
/// current value. Returns the updated user, or `None` if the user no longer
/// exists.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    changes: &ProfileUpdate,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET username    = COALESCE($2, username),
            email       = COALESCE($3, email),
            bio         = COALESCE($4, bio),
            profile_pic = COALESCE($5, profile_pic),
            updated_at  = $6
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&changes.username)
    .bind(&changes.email)
    .bind(&changes.bio)
    .bind(&changes.profile_pic)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Store the uploaded profile picture URL
///
/// Returns the updated user, or `None` if the user no longer exists.
pub async fn set_profile_pic(
    pool: &PgPool,
    id: Uuid,
    url: &str,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET profile_pic = $2, updated_at = $3
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(url)
    .bind(now)
    .fetch_optional(pool)
    .await
}
