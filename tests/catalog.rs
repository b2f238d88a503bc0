mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn get_planet_returns_seeded_record() {
    let test = common::setup().await;
    let id = test.planet("Tatooine", "arid").await;
    assert_eq!(id, 1);

    let (status, body) = test.get("/planets/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Tatooine", "climate": "arid" }));
}

#[tokio::test]
async fn every_existing_planet_is_served_under_its_id() {
    let test = common::setup().await;
    let mut ids = Vec::new();
    for (name, climate) in [("Tatooine", "arid"), ("Hoth", "frozen"), ("Dagobah", "murky")] {
        ids.push(test.planet(name, climate).await);
    }
    for id in ids {
        let (status, body) = test.get(&format!("/planets/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(id));
    }
}

#[tokio::test]
async fn missing_rows_are_404() {
    let test = common::setup().await;
    test.planet("Tatooine", "arid").await;
    test.person("Luke Skywalker", "19BBY").await;

    for uri in ["/planets/42", "/people/42", "/planets/-1", "/people/0"] {
        let (status, body) = test.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }
}

#[tokio::test]
async fn non_integer_id_is_rejected_before_lookup() {
    let test = common::setup().await;
    let (status, _) = test.get("/planets/tatooine").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = test.get("/people/1.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lists_people_in_id_order() {
    let test = common::setup().await;
    let (status, body) = test.get("/people").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    test.person("Luke Skywalker", "19BBY").await;
    test.person("Han Solo", "29BBY").await;

    let (status, body) = test.get("/people").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Luke Skywalker", "birth_year": "19BBY" },
            { "id": 2, "name": "Han Solo", "birth_year": "29BBY" }
        ])
    );

    let (status, body) = test.get("/people/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Han Solo");
}

#[tokio::test]
async fn lists_planets() {
    let test = common::setup().await;
    test.planet("Tatooine", "arid").await;
    test.planet("Alderaan", "temperate").await;

    let (status, body) = test.get("/planets").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Tatooine", "Alderaan"]);
}

#[tokio::test]
async fn users_never_expose_password_or_active_flag() {
    let test = common::setup().await;
    test.user("luke").await;

    let (status, body) = test.get("/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "username": "luke", "first_name": "Test", "last_name": "User" }])
    );
}

#[tokio::test]
async fn storage_failure_is_500_with_detail() {
    let test = common::setup().await;
    sqlx::query("DROP TABLE favorites").execute(&test.pool).await.unwrap();
    sqlx::query("DROP TABLE planets").execute(&test.pool).await.unwrap();

    let (status, body) = test.get("/planets").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("database: "));
}
