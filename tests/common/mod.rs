//! Shared test harness: in-memory database, real router, no network.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

use salesdesk_api::config::AppConfig;
use salesdesk_api::db::ensure_schema;
use salesdesk_api::{api_routes, AppState};

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // A pooled in-memory SQLite gives each connection its own database;
        // pin the pool to one connection so every request sees the same data.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let db = Database::connect(options)
            .await
            .expect("connect to in-memory database");
        ensure_schema(&db).await.expect("create resource tables");

        let state = AppState::new(db, AppConfig::default());
        Self {
            router: api_routes().with_state(state),
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.send("DELETE", path, None).await
    }

    async fn send(&self, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("route request");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse response body")
        };
        (status, value)
    }
}
