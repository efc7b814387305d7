/**
 * Server Configuration
 *
 * All configuration is read from the environment exactly once, at startup,
 * into an immutable `AppConfig`. The values are then handed to the pieces
 * that need them (token keys, collaborator clients); nothing reads the
 * environment after this point.
 *
 * # Required
 *
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `JWT_SECRET` - token signing secret
 *
 * # Optional
 *
 * - `WEATHER_API_KEY` / `WEATHER_API_URL` - weather provider; without a key,
 *   posts are created without weather snapshots
 * - `IMAGE_UPLOAD_URL` / `IMAGE_UPLOAD_PRESET` - image host; without them,
 *   profile picture uploads fail with an upload error
 * - `SERVER_PORT` - listen port, default 3000
 */

use thiserror::Error;

use crate::posts::weather::DEFAULT_WEATHER_API_URL;

/// Configuration loading errors; fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for environment variable {0}")]
    Invalid(&'static str),
}

/// Image host settings; present only when fully configured
#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub upload_preset: String,
}

/// Process-wide immutable configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub weather_api_url: String,
    pub weather_api_key: Option<String>,
    pub image_host: Option<ImageHostConfig>,
    pub port: u16,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let weather_api_url =
            optional("WEATHER_API_URL").unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string());
        let weather_api_key = optional("WEATHER_API_KEY");
        if weather_api_key.is_none() {
            tracing::warn!("WEATHER_API_KEY not set; weather enrichment disabled");
        }

        let image_host = match (optional("IMAGE_UPLOAD_URL"), optional("IMAGE_UPLOAD_PRESET")) {
            (Some(upload_url), Some(upload_preset)) => Some(ImageHostConfig {
                upload_url,
                upload_preset,
            }),
            _ => {
                tracing::warn!(
                    "IMAGE_UPLOAD_URL/IMAGE_UPLOAD_PRESET not set; profile uploads disabled"
                );
                None
            }
        };

        let port = match optional("SERVER_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("SERVER_PORT"))?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            weather_api_url,
            weather_api_key,
            image_host,
            port,
        })
    }
}
