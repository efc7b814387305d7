/**
 * Image Host Client
 *
 * Streams uploaded profile pictures to the external image host and returns
 * the durable URL the host assigns. Uses an unsigned upload preset, so the
 * only configuration is the upload endpoint and the preset name.
 */

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Image uploads carry real payloads; allow more time than an API call
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Upload failure, surfaced to the caller as `UploadFailed`
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("image host returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("image host response carried no URL")]
    MissingUrl,
}

/// Host response; `secure_url` preferred, plain `url` accepted
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

/// Client for the image host
#[derive(Clone)]
pub struct ImageHost {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl ImageHost {
    /// Build a client against the configured upload endpoint
    pub fn new(upload_url: String, upload_preset: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            upload_url,
            upload_preset,
        })
    }

    /// Upload image bytes; returns the durable URL
    pub async fn upload(&self, bytes: Vec<u8>, filename: String) -> Result<String, UploadError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UploadError::Status(response.status()));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url
            .or(body.url)
            .ok_or(UploadError::MissingUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upload_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "secure_url": "https://img.example/profile_pics/abc.png"
            })))
            .mount(&server)
            .await;

        let host = ImageHost::new(format!("{}/upload", server.uri()), "unsigned".to_string())
            .unwrap();
        let url = host
            .upload(vec![0xFF, 0xD8, 0xFF], "me.jpg".to_string())
            .await
            .unwrap();
        assert_eq!(url, "https://img.example/profile_pics/abc.png");
    }

    #[tokio::test]
    async fn test_upload_host_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let host = ImageHost::new(format!("{}/upload", server.uri()), "unsigned".to_string())
            .unwrap();
        let result = host.upload(vec![1, 2, 3], "me.jpg".to_string()).await;
        assert!(matches!(result.unwrap_err(), UploadError::Status(_)));
    }

    #[tokio::test]
    async fn test_upload_response_without_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .mount(&server)
            .await;

        let host = ImageHost::new(format!("{}/upload", server.uri()), "unsigned".to_string())
            .unwrap();
        let result = host.upload(vec![1, 2, 3], "me.jpg".to_string()).await;
        assert!(matches!(result.unwrap_err(), UploadError::MissingUrl));
    }
}
