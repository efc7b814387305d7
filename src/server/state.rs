/**
 * Application State
 *
 * `AppState` is the central state container shared by all handlers:
 * the connection pool, the token keys, and the optional collaborator
 * clients. Everything in it is cheap to clone.
 *
 * The `FromRef` implementations let extractors pull just the piece they
 * need: the auth gateway takes `TokenKeys` without knowing about the rest
 * of the state.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;
use crate::posts::weather::WeatherClient;
use crate::profile::images::ImageHost;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Token signing/verification keys
    pub tokens: TokenKeys,
    /// Weather provider client; `None` disables enrichment
    pub weather: Option<WeatherClient>,
    /// Image host client; `None` disables profile uploads
    pub images: Option<ImageHost>,
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
