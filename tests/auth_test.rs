//! Authentication API integration tests
//!
//! Login, current user, and the 401 gate on protected routes.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::TestApp;
use starwars_api::backend::auth::sessions::{Claims, TokenService};

#[tokio::test]
async fn test_login_then_current_user() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;

    let response = app.login(json!({"email": "a@b.com", "password": "x"})).await;
    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["access_token"].as_str().unwrap().to_string();

    let claims = app.tokens.verify(&token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);

    let response = app.get("/current-user", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["current_user"]["id"], json!(user.id));
    assert_eq!(response.body["current_user"]["email"], "a@b.com");
    assert_eq!(response.body["current_user"]["favorite_planets"], json!([]));
    assert_eq!(response.body["current_user"]["favorite_people"], json!([]));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.create_user("a@b.com", "x").await;

    let response = app.login(json!({"email": "a@b.com", "password": "y"})).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "Bad username or password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app.login(json!({"email": "nobody@b.com", "password": "x"})).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "Bad username or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;
    app.create_user("a@b.com", "x").await;

    for body in [json!({"email": "a@b.com"}), json!({"password": "x"}), json!({})] {
        let response = app.login(body).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["msg"], "Bad username or password");
    }
}

#[tokio::test]
async fn test_login_without_json_body() {
    let app = TestApp::new().await;

    let response = app.request(Method::POST, "/login", None, None).await;
    assert!(response.status.is_client_error());
    assert_eq!(response.body["status"], json!(response.status.as_u16()));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new().await;
    let planet = app.create_planet("Tatooine").await;
    let person = app.create_person("Luke Skywalker").await;

    let planet_uri = format!("/favorite/planet/{}", planet.id);
    let person_uri = format!("/favorite/people/{}", person.id);

    let responses = [
        app.get("/users/favorites/", None).await,
        app.get("/current-user", None).await,
        app.post(&planet_uri, None).await,
        app.delete(&planet_uri, None).await,
        app.post(&person_uri, None).await,
        app.delete(&person_uri, None).await,
    ];

    for response in responses {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_invalid_tokens_are_rejected() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;

    let foreign = TokenService::new("another-secret", 900).issue(user.id).unwrap();
    let expired = app
        .tokens
        .encode_claims(&Claims::new(user.id, chrono::Duration::hours(-1)))
        .unwrap();

    for token in ["garbage", foreign.as_str(), expired.as_str()] {
        let response = app.get("/users/favorites/", Some(token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["msg"], "Missing or invalid token");
    }
}

#[tokio::test]
async fn test_current_user_without_token_says_user_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/current-user", Some("garbage")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "User not found");
}

#[tokio::test]
async fn test_token_for_deleted_user() {
    let app = TestApp::new().await;
    let user = app.create_user("gone@b.com", "x").await;
    let token = app.token_for(&user);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.get("/current-user", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "User not found");

    let response = app.get("/users/favorites/", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "User not found");
}

#[tokio::test]
async fn test_users_listing_hides_passwords() {
    let app = TestApp::new().await;
    app.create_user("a@b.com", "x").await;
    app.create_user("c@d.com", "y").await;

    let response = app.get("/users", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "a@b.com");
    assert_eq!(users[1]["email"], "c@d.com");
    assert!(!response.text.contains("password"));
}
