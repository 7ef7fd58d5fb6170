//! Database operations for favorites
//!
//! Favorites are rows in `favorite_planets` / `favorite_people` keyed by
//! `(user_id, catalog_id)`. Adding an existing favorite is a no-op, as is
//! removing one that is not there.

use crate::backend::auth::users::User;
use crate::backend::server::database::DbPool;
use crate::shared::catalog::{Person, Planet};
use crate::shared::user::UserProfile;

/// Add a planet to a user's favorites (idempotent)
pub async fn add_favorite_planet(
    pool: &DbPool,
    user_id: i64,
    planet_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO favorite_planets (user_id, planet_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, planet_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(planet_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a planet from a user's favorites
///
/// # Returns
/// Whether a favorite was actually removed
pub async fn remove_favorite_planet(
    pool: &DbPool,
    user_id: i64,
    planet_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM favorite_planets WHERE user_id = $1 AND planet_id = $2")
        .bind(user_id)
        .bind(planet_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Add a person to a user's favorites (idempotent)
pub async fn add_favorite_person(
    pool: &DbPool,
    user_id: i64,
    person_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO favorite_people (user_id, people_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, people_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(person_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a person from a user's favorites
///
/// # Returns
/// Whether a favorite was actually removed
pub async fn remove_favorite_person(
    pool: &DbPool,
    user_id: i64,
    person_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM favorite_people WHERE user_id = $1 AND people_id = $2")
        .bind(user_id)
        .bind(person_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Favorite planets of a user, ordered by planet id
pub async fn favorite_planets(pool: &DbPool, user_id: i64) -> Result<Vec<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>(
        r#"
        SELECT p.id, p.name, p.diameter, p.rotation_period, p.orbital_period, p.gravity,
               p.population, p.climate, p.terrain, p.surface_water
        FROM planets p
        JOIN favorite_planets f ON f.planet_id = p.id
        WHERE f.user_id = $1
        ORDER BY p.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Favorite people of a user, ordered by person id
pub async fn favorite_people(pool: &DbPool, user_id: i64) -> Result<Vec<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>(
        r#"
        SELECT p.id, p.name, p.height, p.mass, p.hair_color, p.skin_color, p.eye_color,
               p.birth_year, p.gender
        FROM people p
        JOIN favorite_people f ON f.people_id = p.id
        WHERE f.user_id = $1
        ORDER BY p.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Build the public profile of a user, favorites included
pub async fn load_profile(pool: &DbPool, user: &User) -> Result<UserProfile, sqlx::Error> {
    Ok(UserProfile {
        id: user.id,
        email: user.email.clone(),
        favorite_planets: favorite_planets(pool, user.id).await?,
        favorite_people: favorite_people(pool, user.id).await?,
    })
}
