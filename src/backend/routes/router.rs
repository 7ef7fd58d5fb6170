/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router:
 *
 * 1. Sitemap (`GET /`)
 * 2. API routes (login, current user, users)
 * 3. Catalog routes (planets, people)
 * 4. Favorites routes
 * 5. JSON 404 fallback
 *
 * Requests are traced with `TraceLayer`; CORS is open to any origin.
 */

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::catalog_routes::{configure_catalog_routes, configure_favorite_routes};
use crate::backend::routes::sitemap::{not_found, sitemap};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(sitemap));

    let router = configure_api_routes(router);
    let router = configure_catalog_routes(router);
    let router = configure_favorite_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
