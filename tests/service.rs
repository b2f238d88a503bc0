mod common;

use axum::http::StatusCode;
use favorites_api::seed;
use serde_json::json;

#[tokio::test]
async fn health_and_version() {
    let test = common::setup().await;
    let (status, body) = test.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = test.get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "favorites-api");
}

#[tokio::test]
async fn ready_reports_store_state() {
    let test = common::setup().await;
    let (status, body) = test.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": "ok", "tables": 5 }));

    test.pool.close().await;
    let (status, body) = test.get("/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn ready_names_missing_tables() {
    let test = common::setup().await;
    sqlx::query("DROP TABLE favorites").execute(&test.pool).await.unwrap();

    let (status, body) = test.get("/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({
            "status": "degraded",
            "database": "ok",
            "tables": 4,
            "missing_tables": ["favorites"]
        })
    );
}

#[tokio::test]
async fn openapi_document_lists_resource_paths() {
    let test = common::setup().await;
    let (status, body) = test.get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/users",
        "/people/{people_id}",
        "/planets/{planet_id}",
        "/users/favorites/{user_id}",
        "/favorite/planet/{user_id}/{planet_id}",
        "/favorite/people/{people_id}",
        "/favorite/people/{user_id}/{people_id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(paths["/favorite/planet/{user_id}/{planet_id}"]["delete"].is_object());
}

#[tokio::test]
async fn demo_seed_fills_empty_tables_once() {
    let test = common::setup().await;
    seed::seed_demo_data(&test.pool).await.unwrap();
    seed::seed_demo_data(&test.pool).await.unwrap();

    let (_, planets) = test.get("/planets").await;
    assert_eq!(planets.as_array().unwrap().len(), 3);
    assert_eq!(planets[0], json!({ "id": 1, "name": "Tatooine", "climate": "arid" }));

    let (_, users) = test.get("/users").await;
    assert_eq!(users.as_array().unwrap().len(), 1);

    let (status, _) = test.post("/favorite/people/1").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn cors_headers_are_present() {
    let test = common::setup().await;
    let request = axum::http::Request::get("/planets")
        .header("Origin", "http://example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(test.router.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}
