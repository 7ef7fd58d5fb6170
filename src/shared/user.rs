//! User profile shapes
//!
//! A user is never serialized straight from its database row: the row carries
//! the password hash. `UserProfile` is the only public view.

use serde::{Deserialize, Serialize};

use crate::shared::catalog::{Person, Planet};

/// Public view of a user with their favorites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    /// Favorite planets, ordered by planet id
    pub favorite_planets: Vec<Planet>,
    /// Favorite people, ordered by person id
    pub favorite_people: Vec<Person>,
}

/// Body of `GET /current-user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub current_user: UserProfile,
}
