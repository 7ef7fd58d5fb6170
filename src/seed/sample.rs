//! Sample catalog inserted by `--catalog`

use starwars_api::backend::catalog::db::{NewPerson, NewPlanet};

pub const PLANETS: &[NewPlanet<'static>] = &[
    NewPlanet {
        name: "Tatooine",
        diameter: Some("10465"),
        rotation_period: Some("23"),
        orbital_period: Some("304"),
        gravity: Some("1 standard"),
        population: Some("200000"),
        climate: Some("arid"),
        terrain: Some("desert"),
        surface_water: Some("1"),
    },
    NewPlanet {
        name: "Alderaan",
        diameter: Some("12500"),
        rotation_period: Some("24"),
        orbital_period: Some("364"),
        gravity: Some("1 standard"),
        population: Some("2000000000"),
        climate: Some("temperate"),
        terrain: Some("grasslands, mountains"),
        surface_water: Some("40"),
    },
    NewPlanet {
        name: "Hoth",
        diameter: Some("7200"),
        rotation_period: Some("23"),
        orbital_period: Some("549"),
        gravity: Some("1.1 standard"),
        population: Some("unknown"),
        climate: Some("frozen"),
        terrain: Some("tundra, ice caves, mountain ranges"),
        surface_water: Some("100"),
    },
    NewPlanet {
        name: "Dagobah",
        diameter: Some("8900"),
        rotation_period: Some("23"),
        orbital_period: Some("341"),
        gravity: Some("N/A"),
        population: Some("unknown"),
        climate: Some("murky"),
        terrain: Some("swamp, jungles"),
        surface_water: Some("8"),
    },
];

pub const PEOPLE: &[NewPerson<'static>] = &[
    NewPerson {
        name: "Luke Skywalker",
        height: Some("172"),
        mass: Some("77"),
        hair_color: Some("blond"),
        skin_color: Some("fair"),
        eye_color: Some("blue"),
        birth_year: Some("19BBY"),
        gender: Some("male"),
    },
    NewPerson {
        name: "C-3PO",
        height: Some("167"),
        mass: Some("75"),
        hair_color: Some("n/a"),
        skin_color: Some("gold"),
        eye_color: Some("yellow"),
        birth_year: Some("112BBY"),
        gender: Some("n/a"),
    },
    NewPerson {
        name: "Darth Vader",
        height: Some("202"),
        mass: Some("136"),
        hair_color: Some("none"),
        skin_color: Some("white"),
        eye_color: Some("yellow"),
        birth_year: Some("41.9BBY"),
        gender: Some("male"),
    },
    NewPerson {
        name: "Leia Organa",
        height: Some("150"),
        mass: Some("49"),
        hair_color: Some("brown"),
        skin_color: Some("light"),
        eye_color: Some("brown"),
        birth_year: Some("19BBY"),
        gender: Some("female"),
    },
];
