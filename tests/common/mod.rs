//! Common test utilities and helpers
//!
//! Every test gets its own SQLite file in a temporary directory, migrated
//! through the same code path as the server, and drives the real router with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use starwars_api::backend::auth::password::hash_password_with_cost;
use starwars_api::backend::auth::sessions::TokenService;
use starwars_api::backend::auth::users::{create_user, User};
use starwars_api::backend::catalog::db::{create_person, create_planet, NewPerson, NewPlanet};
use starwars_api::backend::routes::create_router;
use starwars_api::backend::server::{config::ServerConfig, create_state, DbPool};
use starwars_api::shared::{Person, Planet};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Lowest bcrypt cost, keeps fixtures fast
const TEST_BCRYPT_COST: u32 = 4;

/// A fully wired application on a throwaway database
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub tokens: TokenService,
    _dir: TempDir,
}

/// Response status plus parsed JSON body (`Null` when empty or not JSON)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let config = ServerConfig::builder()
            .database_url(database_url)
            .jwt_secret(TEST_SECRET)
            .build()
            .expect("Failed to build test config");

        let state = create_state(&config).await.expect("Failed to create app state");
        let pool = state.db_pool.clone();
        let tokens = state.tokens.clone();

        Self {
            router: create_router(state),
            pool,
            tokens,
            _dir: dir,
        }
    }

    pub async fn create_user(&self, email: &str, password: &str) -> User {
        let password_hash =
            hash_password_with_cost(password, TEST_BCRYPT_COST).expect("Failed to hash password");
        create_user(&self.pool, email, &password_hash)
            .await
            .expect("Failed to create test user")
    }

    pub async fn create_planet(&self, name: &str) -> Planet {
        let planet = NewPlanet {
            name,
            climate: Some("temperate"),
            terrain: Some("grasslands"),
            population: Some("1000"),
            ..Default::default()
        };
        create_planet(&self.pool, &planet)
            .await
            .expect("Failed to create test planet")
    }

    pub async fn create_person(&self, name: &str) -> Person {
        let person = NewPerson {
            name,
            height: Some("172"),
            mass: Some("77"),
            ..Default::default()
        };
        create_person(&self.pool, &person)
            .await
            .expect("Failed to create test person")
    }

    pub fn token_for(&self, user: &User) -> String {
        self.tokens.issue(user.id).expect("Failed to issue test token")
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::POST, uri, token, None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }

    pub async fn login(&self, body: Value) -> TestResponse {
        self.request(Method::POST, "/login", None, Some(body)).await
    }
}

/// Ids of the entries in a serialized favorites list
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .map(|items| items.iter().filter_map(|item| item["id"].as_i64()).collect())
        .unwrap_or_default()
}
