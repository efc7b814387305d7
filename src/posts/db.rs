/**
 * Post Model and Database Operations
 *
 * Posts live in the `posts` table; the like-set is the `likes` table keyed
 * by `(post_id, user_id)`. Reads pull the author username and the like/
 * comment id collections in a single query.
 *
 * Like toggling is expressed as single-statement set operations
 * (`INSERT .. ON CONFLICT DO NOTHING`, then `DELETE`) so concurrent toggles
 * against the same post never go through an application-side
 * read-modify-write cycle.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::posts::weather::WeatherSnapshot;

/// Post row joined with its author and id collections
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub title: String,
    pub content: String,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather_temperature: Option<f64>,
    pub weather_conditions: Option<String>,
    pub weather_icon: Option<String>,
    /// Users who currently like this post
    pub liker_ids: Vec<Uuid>,
    /// Comment ids in creation order
    pub comment_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostRecord {
    /// The weather snapshot, if one was captured at creation
    pub fn weather(&self) -> Option<WeatherSnapshot> {
        match (
            self.weather_temperature,
            &self.weather_conditions,
            &self.weather_icon,
        ) {
            (Some(temperature), Some(conditions), Some(icon)) => Some(WeatherSnapshot {
                temperature,
                conditions: conditions.clone(),
                icon: icon.clone(),
            }),
            _ => None,
        }
    }
}

/// Fields for a new post; the author comes from the verified identity
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather: Option<WeatherSnapshot>,
}

/// Partial post update
///
/// The author is deliberately not representable here, so a merge can never
/// reassign a post.
#[derive(Debug, Default, Clone)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

const POST_SELECT: &str = r#"
    SELECT p.id, p.author_id, u.username AS author_username,
           p.title, p.content, p.location, p.location_url,
           p.latitude, p.longitude,
           p.weather_temperature, p.weather_conditions, p.weather_icon,
           COALESCE((SELECT array_agg(l.user_id)
                     FROM likes l WHERE l.post_id = p.id), '{}') AS liker_ids,
           COALESCE((SELECT array_agg(c.id ORDER BY c.created_at)
                     FROM comments c WHERE c.post_id = p.id), '{}') AS comment_ids,
           p.created_at, p.updated_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// Create a new post
pub async fn create_post(pool: &PgPool, new: &NewPost) -> Result<PostRecord, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let weather = new.weather.as_ref();

    sqlx::query(
        r#"
        INSERT INTO posts (id, author_id, title, content, location, location_url,
                           latitude, longitude,
                           weather_temperature, weather_conditions, weather_icon,
                           created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(id)
    .bind(new.author_id)
    .bind(&new.title)
    .bind(&new.content)
    .bind(&new.location)
    .bind(&new.location_url)
    .bind(new.latitude)
    .bind(new.longitude)
    .bind(weather.map(|w| w.temperature))
    .bind(weather.map(|w| w.conditions.as_str()))
    .bind(weather.map(|w| w.icon.as_str()))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_post_by_id(pool, id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Get all posts, newest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<PostRecord>, sqlx::Error> {
    sqlx::query_as::<_, PostRecord>(&format!("{POST_SELECT} ORDER BY p.created_at DESC"))
        .fetch_all(pool)
        .await
}

/// Get one post, or `None` if not found
pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PostRecord>, sqlx::Error> {
    sqlx::query_as::<_, PostRecord>(&format!("{POST_SELECT} WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Get just the author of a post, for ownership checks before mutation
pub async fn get_post_author(pool: &PgPool, id: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT author_id FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Merge provided fields into a post
///
/// The author column is not part of the statement and cannot be changed.
/// Returns the updated post, or `None` if it vanished between the ownership
/// check and the update.
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    changes: &PostChanges,
) -> Result<Option<PostRecord>, sqlx::Error> {
    let now = Utc::now();

    let updated = sqlx::query(
        r#"
        UPDATE posts
        SET title        = COALESCE($2, title),
            content      = COALESCE($3, content),
            location     = COALESCE($4, location),
            location_url = COALESCE($5, location_url),
            latitude     = COALESCE($6, latitude),
            longitude    = COALESCE($7, longitude),
            updated_at   = $8
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&changes.title)
    .bind(&changes.content)
    .bind(&changes.location)
    .bind(&changes.location_url)
    .bind(changes.latitude)
    .bind(changes.longitude)
    .bind(now)
    .execute(pool)
    .await?
    .rows_affected();

    if updated == 0 {
        return Ok(None);
    }

    get_post_by_id(pool, id).await
}

/// Delete a post; comments and likes cascade
///
/// Returns whether a row was actually removed.
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(deleted > 0)
}

/// Toggle a user's membership in a post's like-set
///
/// Both branches are single atomic statements; two users toggling the same
/// post concurrently each land exactly their own change. Returns `true` when
/// the user ends up liking the post, `false` when the toggle removed them.
pub async fn toggle_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO likes (post_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (post_id, user_id) DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted > 0 {
        return Ok(true);
    }

    // Already a member: this toggle is an unlike
    sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(false)
}
