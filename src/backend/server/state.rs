/**
 * Application State Management
 *
 * `AppState` is the central state container. It holds the datastore pool and
 * the token service; the `FromRef` implementations let handlers extract just
 * the part they need:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<DbPool>, State(tokens): State<TokenService>) { ... }
 * ```
 *
 * Both fields are cheap to clone (`AnyPool` and the JWT keys are reference
 * counted internally).
 */

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::database::DbPool;

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Datastore connection pool
    pub db_pool: DbPool,

    /// Bearer token issuer and verifier
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db_pool: DbPool, tokens: TokenService) -> Self {
        Self { db_pool, tokens }
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
