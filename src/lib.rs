//! Record-keeping backend for a rice and edible-oil sales operation.
//!
//! Six resource groups share one generic CRUD pipeline: loose client JSON is
//! normalized into a canonical typed record, persisted through an injectable
//! store, and listed back newest first. See [`resources::Resource`] for the
//! per-resource configuration surface.

#![forbid(unsafe_code)]

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

pub mod coerce;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod resources;
pub mod store;

use crate::config::AppConfig;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }
}

/// Full API surface: the six resource groups plus the banner and health
/// endpoints.
pub fn api_routes() -> Router<AppState> {
    handlers::resource_routes()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Salesdesk API is running",
        "environment": state.config.environment,
    }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
