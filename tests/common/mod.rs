#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use favorites_api::model::NewUser;
use favorites_api::{app, ensure_tables, seed, AppState, Backend};
use serde_json::Value;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tower::ServiceExt;

/// Router over a private in-memory SQLite store.
pub struct TestApp {
    pub pool: AnyPool,
    pub router: Router,
}

/// One connection keeps the in-memory database alive for the whole test.
pub async fn setup() -> TestApp {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory store");
    ensure_tables(&pool, Backend::Sqlite).await.expect("tables");
    let router = app(AppState::new(pool.clone(), 1));
    TestApp { pool, router }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn call(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::POST, uri).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri).await
    }

    pub async fn user(&self, username: &str) -> i64 {
        seed::insert_user(
            &self.pool,
            &NewUser {
                username,
                first_name: "Test",
                last_name: "User",
                password: "secret",
                is_active: true,
            },
        )
        .await
        .expect("insert user")
    }

    pub async fn planet(&self, name: &str, climate: &str) -> i64 {
        seed::insert_planet(&self.pool, name, climate).await.expect("insert planet")
    }

    pub async fn person(&self, name: &str, birth_year: &str) -> i64 {
        seed::insert_person(&self.pool, name, birth_year).await.expect("insert person")
    }

    pub async fn favorite_ids(&self) -> Vec<i64> {
        sqlx::query_scalar("SELECT id FROM favorites ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .expect("favorites")
    }
}
