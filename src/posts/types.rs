/**
 * Post Handler Types
 *
 * Request and response schemas for the post endpoints.
 *
 * List responses carry comment ids only; the single-post response resolves
 * comments (and their authors) in full.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comments::types::CommentResponse;
use crate::posts::db::PostRecord;
use crate::posts::weather::WeatherSnapshot;

/// Display-safe author projection (username only, never the email or hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
}

/// Create post request
///
/// The author is never part of the request; it is taken from the verified
/// identity. Latitude and longitude must both be present for weather
/// enrichment to trigger.
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial post update request
///
/// There is no author field here, matching the update statement: a merge
/// cannot reassign a post.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Post as returned by list/create/update/like
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorSummary,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Snapshot captured at creation; absent when no coordinates were given
    /// or enrichment was unavailable
    pub weather: Option<WeatherSnapshot>,
    /// Comment ids in creation order
    pub comments: Vec<Uuid>,
    /// Users who currently like this post
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostRecord> for PostResponse {
    fn from(record: PostRecord) -> Self {
        let weather = record.weather();
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            author: AuthorSummary {
                id: record.author_id,
                username: record.author_username,
            },
            location: record.location,
            location_url: record.location_url,
            latitude: record.latitude,
            longitude: record.longitude,
            weather,
            comments: record.comment_ids,
            likes: record.liker_ids,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Single post with comments resolved
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: AuthorSummary,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather: Option<WeatherSnapshot>,
    /// Comments with their authors resolved
    pub comments: Vec<CommentResponse>,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDetailResponse {
    pub fn from_record(record: PostRecord, comments: Vec<CommentResponse>) -> Self {
        let weather = record.weather();
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            author: AuthorSummary {
                id: record.author_id,
                username: record.author_username,
            },
            location: record.location,
            location_url: record.location_url,
            latitude: record.latitude,
            longitude: record.longitude,
            weather,
            comments,
            likes: record.liker_ids,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_record(weather: Option<WeatherSnapshot>) -> PostRecord {
        PostRecord {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            author_username: "wanderer".to_string(),
            title: "Sunrise at the overlook".to_string(),
            content: "Worth the 5am start.".to_string(),
            location: Some("Harriman State Park".to_string()),
            location_url: None,
            latitude: Some(41.2),
            longitude: Some(-74.1),
            weather_temperature: weather.as_ref().map(|w| w.temperature),
            weather_conditions: weather.as_ref().map(|w| w.conditions.clone()),
            weather_icon: weather.as_ref().map(|w| w.icon.clone()),
            liker_ids: vec![],
            comment_ids: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_response_carries_weather_snapshot() {
        let snapshot = WeatherSnapshot {
            temperature: 20.0,
            conditions: "Clear".to_string(),
            icon: "☀️".to_string(),
        };
        let response = PostResponse::from(sample_record(Some(snapshot.clone())));
        assert_eq!(response.weather, Some(snapshot));
    }

    #[test]
    fn test_response_without_weather() {
        let response = PostResponse::from(sample_record(None));
        assert!(response.weather.is_none());
    }

    #[test]
    fn test_response_json_field_names() {
        let json = serde_json::to_value(PostResponse::from(sample_record(None))).unwrap();
        assert!(json.get("locationUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["author"]["username"], "wanderer");
        // Display-safe projection: no email on the author
        assert!(json["author"].get("email").is_none());
    }

    #[test]
    fn test_update_request_has_no_author_field() {
        // A client trying to smuggle an author reassignment in the body
        // deserializes cleanly with the field ignored.
        let req: UpdatePostRequest = serde_json::from_str(
            r#"{"title": "new title", "author": "11111111-1111-1111-1111-111111111111"}"#,
        )
        .unwrap();
        assert_eq!(req.title.as_deref(), Some("new title"));
    }
}
