/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /login` - Verify credentials, issue a token
 * - `GET /current-user` - Profile of the token holder
 *
 * ## Users
 * - `GET /users` - Every user's profile
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{current_user, list_users, login};
use crate::backend::server::state::AppState;

/// Configure authentication and user routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/login", post(login))
        .route("/current-user", get(current_user))
        .route("/users", get(list_users))
}
