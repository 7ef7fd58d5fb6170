/**
 * Favorites HTTP Handlers
 *
 * Every route here requires a bearer token. The acting user comes from the
 * token subject; path parameters only name the catalog entry. Each
 * mutation answers with the user's full profile after the change.
 *
 * # Errors
 *
 * * `401 Unauthorized` - missing/invalid token, or the token's user is gone
 * * `404 Not Found` - the planet or person does not exist
 */

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::db;
use crate::backend::catalog::db::{get_person_by_id, get_planet_by_id};
use crate::backend::catalog::handlers::{person_id, planet_id};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::database::DbPool;
use crate::shared::user::UserProfile;

async fn ensure_planet_exists(pool: &DbPool, planet_id: i64) -> Result<(), ApiError> {
    get_planet_by_id(pool, planet_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("Planet not found"))
}

async fn ensure_person_exists(pool: &DbPool, person_id: i64) -> Result<(), ApiError> {
    get_person_by_id(pool, person_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("Person not found"))
}

/// GET /users/favorites/
pub async fn get_user_favorites(
    State(pool): State<DbPool>,
    auth: AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = auth.load_user(&pool).await?;
    Ok(Json(db::load_profile(&pool, &user).await?))
}

/// POST /favorite/planet/{id}
pub async fn add_favorite_planet(
    State(pool): State<DbPool>,
    auth: AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = auth.load_user(&pool).await?;
    let planet_id = planet_id(path)?;
    ensure_planet_exists(&pool, planet_id).await?;

    db::add_favorite_planet(&pool, user.id, planet_id).await?;
    tracing::info!("User {} added favorite planet {}", user.id, planet_id);

    Ok(Json(db::load_profile(&pool, &user).await?))
}

/// DELETE /favorite/planet/{id}
pub async fn remove_favorite_planet(
    State(pool): State<DbPool>,
    auth: AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = auth.load_user(&pool).await?;
    let planet_id = planet_id(path)?;
    ensure_planet_exists(&pool, planet_id).await?;

    if db::remove_favorite_planet(&pool, user.id, planet_id).await? {
        tracing::info!("User {} removed favorite planet {}", user.id, planet_id);
    } else {
        tracing::debug!("Planet {} was not a favorite of user {}", planet_id, user.id);
    }

    Ok(Json(db::load_profile(&pool, &user).await?))
}

/// POST /favorite/people/{id}
pub async fn add_favorite_person(
    State(pool): State<DbPool>,
    auth: AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = auth.load_user(&pool).await?;
    let person_id = person_id(path)?;
    ensure_person_exists(&pool, person_id).await?;

    db::add_favorite_person(&pool, user.id, person_id).await?;
    tracing::info!("User {} added favorite person {}", user.id, person_id);

    Ok(Json(db::load_profile(&pool, &user).await?))
}

/// DELETE /favorite/people/{id}
pub async fn remove_favorite_person(
    State(pool): State<DbPool>,
    auth: AuthUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = auth.load_user(&pool).await?;
    let person_id = person_id(path)?;
    ensure_person_exists(&pool, person_id).await?;

    if db::remove_favorite_person(&pool, user.id, person_id).await? {
        tracing::info!("User {} removed favorite person {}", user.id, person_id);
    } else {
        tracing::debug!("Person {} was not a favorite of user {}", person_id, user.id);
    }

    Ok(Json(db::load_profile(&pool, &user).await?))
}
