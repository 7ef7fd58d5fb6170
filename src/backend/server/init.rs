/**
 * Server Initialization
 *
 * 1. Connect to the datastore and run migrations
 * 2. Build the token service from the configured secret
 * 3. Assemble the router
 *
 * A datastore that cannot be opened stops startup: every route needs it.
 */

use axum::Router;

use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database::{load_database, DatabaseError};
use crate::backend::server::state::AppState;

/// Build the application state from configuration
pub async fn create_state(config: &ServerConfig) -> Result<AppState, DatabaseError> {
    let db_pool = load_database(&config.database_url).await?;
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_seconds);
    Ok(AppState::new(db_pool, tokens))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, DatabaseError> {
    tracing::info!("Initializing Star Wars API server");

    let app_state = create_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
