//! Catalog and favorites routes
//!
//! - `GET /planets`, `GET /planets/{id}`
//! - `GET /people`, `GET /people/{id}`
//! - `GET /users/favorites/` (authenticated)
//! - `POST|DELETE /favorite/planet/{id}` (authenticated)
//! - `POST|DELETE /favorite/people/{id}` (authenticated)

use axum::{routing::get, routing::post, Router};

use crate::backend::catalog::{get_person, get_planet, list_people, list_planets};
use crate::backend::favorites::{
    add_favorite_person, add_favorite_planet, get_user_favorites, remove_favorite_person,
    remove_favorite_planet,
};
use crate::backend::server::state::AppState;

/// Configure the public catalog routes
pub fn configure_catalog_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

/// Configure the authenticated favorites routes
///
/// Trailing slashes are not normalized by the router, so the favorites
/// listing is registered with and without one.
pub fn configure_favorite_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/favorites", get(get_user_favorites))
        .route("/users/favorites/", get(get_user_favorites))
        .route(
            "/favorite/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(add_favorite_person).delete(remove_favorite_person),
        )
}
