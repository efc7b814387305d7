/**
 * Comment Model and Database Operations
 *
 * Comments reference their parent post with a foreign key (cascade on post
 * deletion), so a post's comment collection is exactly the set of live
 * comment rows: creating or deleting a comment maintains the post↔comment
 * link in the same atomic statement.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Comment row joined with its author's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const COMMENT_SELECT: &str = r#"
    SELECT c.id, c.post_id, c.author_id, u.username AS author_username,
           c.body, c.created_at, c.updated_at
    FROM comments c
    JOIN users u ON u.id = c.author_id
"#;

/// Whether the insert failed because the parent post does not exist
fn is_missing_post(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.constraint())
        .map(|name| name == "comments_post_id_fkey")
        .unwrap_or(false)
}

/// Create a comment on a post
///
/// The parent-post existence check and the append are one statement: the
/// foreign key rejects the insert if the post is gone, which is reported as
/// `Ok(None)` so the handler can answer 404.
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    body: &str,
) -> Result<Option<CommentRecord>, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let inserted = sqlx::query(
        r#"
        INSERT INTO comments (id, post_id, author_id, body, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(author_id)
    .bind(body)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match inserted {
        Ok(_) => {}
        Err(e) if is_missing_post(&e) => return Ok(None),
        Err(e) => return Err(e),
    }

    get_comment_by_id(pool, id).await
}

/// All comments for a post, oldest first
pub async fn list_comments_for_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(&format!(
        "{COMMENT_SELECT} WHERE c.post_id = $1 ORDER BY c.created_at"
    ))
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// One comment, or `None` if not found
pub async fn get_comment_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(&format!("{COMMENT_SELECT} WHERE c.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete a comment
///
/// A single statement: the row disappears and with it its membership in the
/// parent post's comment collection. Returns whether a row was removed.
pub async fn delete_comment(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let deleted = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(deleted > 0)
}
