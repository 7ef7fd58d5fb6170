//! Database operations for the planet and people catalog

use crate::backend::server::database::DbPool;
use crate::shared::catalog::{Person, Planet};

const PLANET_COLUMNS: &str = "id, name, diameter, rotation_period, orbital_period, gravity, \
                              population, climate, terrain, surface_water";

const PERSON_COLUMNS: &str =
    "id, name, height, mass, hair_color, skin_color, eye_color, birth_year, gender";

/// Planet to insert
#[derive(Debug, Clone, Copy, Default)]
pub struct NewPlanet<'a> {
    pub name: &'a str,
    pub diameter: Option<&'a str>,
    pub rotation_period: Option<&'a str>,
    pub orbital_period: Option<&'a str>,
    pub gravity: Option<&'a str>,
    pub population: Option<&'a str>,
    pub climate: Option<&'a str>,
    pub terrain: Option<&'a str>,
    pub surface_water: Option<&'a str>,
}

/// Person to insert
#[derive(Debug, Clone, Copy, Default)]
pub struct NewPerson<'a> {
    pub name: &'a str,
    pub height: Option<&'a str>,
    pub mass: Option<&'a str>,
    pub hair_color: Option<&'a str>,
    pub skin_color: Option<&'a str>,
    pub eye_color: Option<&'a str>,
    pub birth_year: Option<&'a str>,
    pub gender: Option<&'a str>,
}

/// List every planet, ordered by id
pub async fn list_planets(pool: &DbPool) -> Result<Vec<Planet>, sqlx::Error> {
    let sql = format!("SELECT {} FROM planets ORDER BY id", PLANET_COLUMNS);
    sqlx::query_as::<_, Planet>(&sql).fetch_all(pool).await
}

/// Get planet by ID
///
/// # Returns
/// Planet or None if not found
pub async fn get_planet_by_id(pool: &DbPool, id: i64) -> Result<Option<Planet>, sqlx::Error> {
    let sql = format!("SELECT {} FROM planets WHERE id = $1", PLANET_COLUMNS);
    sqlx::query_as::<_, Planet>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a planet
pub async fn create_planet(pool: &DbPool, planet: &NewPlanet<'_>) -> Result<Planet, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO planets (name, diameter, rotation_period, orbital_period, gravity,
                             population, climate, terrain, surface_water)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {}
        "#,
        PLANET_COLUMNS
    );

    sqlx::query_as::<_, Planet>(&sql)
        .bind(planet.name)
        .bind(planet.diameter)
        .bind(planet.rotation_period)
        .bind(planet.orbital_period)
        .bind(planet.gravity)
        .bind(planet.population)
        .bind(planet.climate)
        .bind(planet.terrain)
        .bind(planet.surface_water)
        .fetch_one(pool)
        .await
}

/// List every person, ordered by id
pub async fn list_people(pool: &DbPool) -> Result<Vec<Person>, sqlx::Error> {
    let sql = format!("SELECT {} FROM people ORDER BY id", PERSON_COLUMNS);
    sqlx::query_as::<_, Person>(&sql).fetch_all(pool).await
}

/// Get person by ID
///
/// # Returns
/// Person or None if not found
pub async fn get_person_by_id(pool: &DbPool, id: i64) -> Result<Option<Person>, sqlx::Error> {
    let sql = format!("SELECT {} FROM people WHERE id = $1", PERSON_COLUMNS);
    sqlx::query_as::<_, Person>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a person
pub async fn create_person(pool: &DbPool, person: &NewPerson<'_>) -> Result<Person, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO people (name, height, mass, hair_color, skin_color, eye_color,
                            birth_year, gender)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {}
        "#,
        PERSON_COLUMNS
    );

    sqlx::query_as::<_, Person>(&sql)
        .bind(person.name)
        .bind(person.height)
        .bind(person.mass)
        .bind(person.hair_color)
        .bind(person.skin_color)
        .bind(person.eye_color)
        .bind(person.birth_year)
        .bind(person.gender)
        .fetch_one(pool)
        .await
}
