//! Favorites API integration tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{ids, TestApp};

#[tokio::test]
async fn test_add_favorite_planet_is_idempotent() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);
    let planet = app.create_planet("Tatooine").await;
    let uri = format!("/favorite/planet/{}", planet.id);

    for _ in 0..3 {
        let response = app.post(&uri, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["id"], json!(user.id));
        assert_eq!(ids(&response.body["favorite_planets"]), vec![planet.id]);
    }

    let response = app.get("/current-user", Some(&token)).await;
    assert_eq!(ids(&response.body["current_user"]["favorite_planets"]), vec![planet.id]);
}

#[tokio::test]
async fn test_remove_favorite_planet() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);
    let tatooine = app.create_planet("Tatooine").await;
    let hoth = app.create_planet("Hoth").await;

    app.post(&format!("/favorite/planet/{}", tatooine.id), Some(&token)).await;
    app.post(&format!("/favorite/planet/{}", hoth.id), Some(&token)).await;

    let response = app
        .delete(&format!("/favorite/planet/{}", tatooine.id), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body["favorite_planets"]), vec![hoth.id]);
}

#[tokio::test]
async fn test_remove_planet_never_favorited_is_noop() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);
    let tatooine = app.create_planet("Tatooine").await;
    let hoth = app.create_planet("Hoth").await;

    app.post(&format!("/favorite/planet/{}", tatooine.id), Some(&token)).await;

    let response = app
        .delete(&format!("/favorite/planet/{}", hoth.id), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body["favorite_planets"]), vec![tatooine.id]);
}

#[tokio::test]
async fn test_favorite_unknown_planet_is_404() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);

    let response = app.post("/favorite/planet/999", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["msg"], "Planet not found");

    let response = app.delete("/favorite/planet/999", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_and_remove_favorite_person() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);
    let luke = app.create_person("Luke Skywalker").await;
    let uri = format!("/favorite/people/{}", luke.id);

    let response = app.post(&uri, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body["favorite_people"]), vec![luke.id]);
    assert_eq!(response.body["favorite_people"][0]["name"], "Luke Skywalker");

    let response = app.post(&uri, Some(&token)).await;
    assert_eq!(ids(&response.body["favorite_people"]), vec![luke.id]);

    let response = app.delete(&uri, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["favorite_people"], json!([]));

    let response = app.delete(&uri, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["favorite_people"], json!([]));
}

#[tokio::test]
async fn test_favorite_unknown_person_is_404() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);

    let response = app.post("/favorite/people/77", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["msg"], "Person not found");
}

#[tokio::test]
async fn test_favorites_are_scoped_to_the_token_holder() {
    let app = TestApp::new().await;
    let luke = app.create_user("luke@b.com", "x").await;
    let leia = app.create_user("leia@b.com", "y").await;
    let hoth = app.create_planet("Hoth").await;

    app.post(&format!("/favorite/planet/{}", hoth.id), Some(&app.token_for(&luke)))
        .await;

    let response = app.get("/users/favorites/", Some(&app.token_for(&leia))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "leia@b.com");
    assert_eq!(response.body["favorite_planets"], json!([]));

    let response = app.get("/users/favorites", Some(&app.token_for(&luke))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body["favorite_planets"]), vec![hoth.id]);
}

#[tokio::test]
async fn test_users_listing_includes_favorites() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);
    let planet = app.create_planet("Dagobah").await;
    let person = app.create_person("Yoda").await;

    app.post(&format!("/favorite/planet/{}", planet.id), Some(&token)).await;
    app.post(&format!("/favorite/people/{}", person.id), Some(&token)).await;

    let response = app.get("/users", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body[0]["favorite_planets"]), vec![planet.id]);
    assert_eq!(ids(&response.body[0]["favorite_people"]), vec![person.id]);
}

#[tokio::test]
async fn test_favorite_with_non_integer_id_is_404() {
    let app = TestApp::new().await;
    let user = app.create_user("a@b.com", "x").await;
    let token = app.token_for(&user);

    let response = app.post("/favorite/people/abc", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"msg": "Person not found", "status": 404}));

    let response = app.delete("/favorite/planet/abc", Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["msg"], "Planet not found");

    let response = app.post("/favorite/people/abc", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
