/**
 * Get Current User Handler
 *
 * GET /current-user
 *
 * Returns the profile of the token holder wrapped in `current_user`. An
 * absent or invalid token and a token whose user was deleted both answer
 * 401 `User not found`.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::ApiError;
use crate::backend::favorites::db::load_profile;
use crate::backend::middleware::AuthUser;
use crate::backend::server::database::DbPool;
use crate::shared::user::CurrentUserResponse;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "current_user": {
///     "id": 1,
///     "email": "a@b.com",
///     "favorite_planets": [],
///     "favorite_people": []
///   }
/// }
/// ```
pub async fn current_user(
    State(pool): State<DbPool>,
    auth: Option<AuthUser>,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let auth = auth.ok_or(ApiError::UserNotFound)?;
    let user = auth.load_user(&pool).await?;

    Ok(Json(CurrentUserResponse {
        current_user: load_profile(&pool, &user).await?,
    }))
}
