/**
 * Comment Handler Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comments::db::CommentRecord;
use crate::posts::types::AuthorSummary;

/// Create comment request
///
/// The author comes from the verified identity, never the body.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: Uuid,
    pub text: String,
}

/// Comment with its author resolved
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: AuthorSummary,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommentRecord> for CommentResponse {
    fn from(record: CommentRecord) -> Self {
        Self {
            id: record.id,
            post_id: record.post_id,
            author: AuthorSummary {
                id: record.author_id,
                username: record.author_username,
            },
            text: record.body,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_field_names() {
        let req: CreateCommentRequest = serde_json::from_str(
            r#"{"postId": "7f8da4f0-5f4e-4f2b-9c0a-2e6c2ac3a111", "text": "great spot"}"#,
        )
        .unwrap();
        assert_eq!(req.text, "great spot");
    }

    #[test]
    fn test_response_shape() {
        let record = CommentRecord {
            id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            author_username: "wanderer".to_string(),
            body: "great spot".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(CommentResponse::from(record)).unwrap();

        assert_eq!(json["text"], "great spot");
        assert!(json.get("postId").is_some());
        assert_eq!(json["author"]["username"], "wanderer");
        assert!(json["author"].get("email").is_none());
    }
}
