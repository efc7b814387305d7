/**
 * Server Initialization
 *
 * Builds the Axum application from loaded configuration: database pool,
 * migrations, token keys, collaborator clients, and the router.
 *
 * The database is required: without a store every route is useless, so a
 * connection failure aborts startup instead of degrading.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;
use crate::posts::weather::WeatherClient;
use crate::profile::images::ImageHost;
use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Connect to the database and bring the schema up to date
///
/// Migration failures are logged but tolerated; the usual cause is a schema
/// that is already current.
pub async fn load_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing; the schema may already be up to date");
        }
    }

    Ok(pool)
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing server");

    let db = load_database(config).await?;

    let tokens = TokenKeys::new(&config.jwt_secret);

    let weather = match &config.weather_api_key {
        Some(key) => Some(WeatherClient::new(
            config.weather_api_url.clone(),
            key.clone(),
        )?),
        None => None,
    };

    let images = match &config.image_host {
        Some(host) => Some(ImageHost::new(
            host.upload_url.clone(),
            host.upload_preset.clone(),
        )?),
        None => None,
    };

    let app_state = AppState {
        db,
        tokens,
        weather,
        images,
    };

    Ok(create_router(app_state))
}
