//! GET /users
//!
//! Public listing of every user's profile.

use axum::{extract::State, response::Json};

use crate::backend::auth::users::list_users as fetch_users;
use crate::backend::error::ApiError;
use crate::backend::favorites::db::load_profile;
use crate::backend::server::database::DbPool;
use crate::shared::user::UserProfile;

pub async fn list_users(State(pool): State<DbPool>) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let users = fetch_users(&pool).await?;

    let mut profiles = Vec::with_capacity(users.len());
    for user in &users {
        profiles.push(load_profile(&pool, user).await?);
    }

    Ok(Json(profiles))
}
