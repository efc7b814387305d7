/**
 * Weather Enrichment Client
 *
 * Fetches a realtime weather summary for a coordinate pair at post-creation
 * time. The result is stored on the post as an immutable snapshot.
 *
 * Enrichment is strictly best-effort: every failure mode here surfaces as a
 * `WeatherError` that the post handler logs and discards. A post is never
 * rejected because the weather provider was slow, down, or returned
 * something unexpected.
 */

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on a single provider call, so a slow provider cannot pin
/// request-handling tasks
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default provider endpoint (Tomorrow.io v4)
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.tomorrow.io/v4";

/// Weather summary captured at post creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub conditions: String,
    pub icon: String,
}

/// Enrichment failure; never propagated to the API caller
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected weather response shape")]
    UnexpectedShape,
}

/// Provider response: `{"data": {"values": {...}}}`
#[derive(Debug, Deserialize)]
struct RealtimeResponse {
    data: Option<RealtimeData>,
}

#[derive(Debug, Deserialize)]
struct RealtimeData {
    values: Option<RealtimeValues>,
}

#[derive(Debug, Deserialize)]
struct RealtimeValues {
    temperature: Option<f64>,
    #[serde(rename = "weatherCode")]
    weather_code: Option<i64>,
}

/// Map a Tomorrow.io weather code to a label and an emoji icon
fn describe_weather_code(code: i64) -> (&'static str, &'static str) {
    match code {
        1000 => ("Clear", "☀️"),
        1100 => ("Mostly Clear", "🌤️"),
        1101 => ("Partly Cloudy", "⛅"),
        1102 => ("Mostly Cloudy", "🌥️"),
        1001 => ("Cloudy", "☁️"),
        2000 | 2100 => ("Fog", "🌫️"),
        4000 => ("Drizzle", "🌦️"),
        4200 => ("Light Rain", "🌦️"),
        4001 => ("Rain", "🌧️"),
        4201 => ("Heavy Rain", "🌧️"),
        5100 | 5001 => ("Light Snow", "🌨️"),
        5000 => ("Snow", "❄️"),
        5101 => ("Heavy Snow", "❄️"),
        6000 | 6001 | 6200 | 6201 => ("Freezing Rain", "🌧️"),
        7000 | 7101 | 7102 => ("Ice Pellets", "🧊"),
        8000 => ("Thunderstorm", "⛈️"),
        _ => ("Unknown", "🌡️"),
    }
}

/// Client for the weather provider
///
/// Built once at startup from configuration. Only constructed when an API
/// key is configured; without one, posts are simply created without a
/// snapshot.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Build a client against the given provider URL
    pub fn new(base_url: String, api_key: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Fetch the current weather for a coordinate pair
    pub async fn realtime(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/weather/realtime", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("location", format!("{latitude},{longitude}")),
                ("apikey", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status()));
        }

        let body: RealtimeResponse = response.json().await?;
        let values = body
            .data
            .and_then(|d| d.values)
            .ok_or(WeatherError::UnexpectedShape)?;

        let temperature = values.temperature.ok_or(WeatherError::UnexpectedShape)?;
        let code = values.weather_code.ok_or(WeatherError::UnexpectedShape)?;
        let (conditions, icon) = describe_weather_code(code);

        Ok(WeatherSnapshot {
            temperature,
            conditions: conditions.to_string(),
            icon: icon.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_describe_weather_code() {
        assert_eq!(describe_weather_code(1000), ("Clear", "☀️"));
        assert_eq!(describe_weather_code(8000), ("Thunderstorm", "⛈️"));
        assert_eq!(describe_weather_code(-3), ("Unknown", "🌡️"));
    }

    #[tokio::test]
    async fn test_realtime_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather/realtime"))
            .and(query_param("location", "40,-74"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "values": { "temperature": 20.0, "weatherCode": 1000 } }
            })))
            .mount(&server)
            .await;

        let client = WeatherClient::new(server.uri(), "test-key".to_string()).unwrap();
        let snapshot = client.realtime(40.0, -74.0).await.unwrap();

        assert_eq!(
            snapshot,
            WeatherSnapshot {
                temperature: 20.0,
                conditions: "Clear".to_string(),
                icon: "☀️".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_realtime_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather/realtime"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = WeatherClient::new(server.uri(), "test-key".to_string()).unwrap();
        let result = client.realtime(40.0, -74.0).await;
        assert!(matches!(result.unwrap_err(), WeatherError::Status(_)));
    }

    #[tokio::test]
    async fn test_realtime_unexpected_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather/realtime"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "data": {} })),
            )
            .mount(&server)
            .await;

        let client = WeatherClient::new(server.uri(), "test-key".to_string()).unwrap();
        let result = client.realtime(40.0, -74.0).await;
        assert!(matches!(result.unwrap_err(), WeatherError::UnexpectedShape));
    }
}
