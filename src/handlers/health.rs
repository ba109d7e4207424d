// src/handlers/health.rs
use crate::models::health::HealthStatus;
use axum::{routing::get, Json, Router};

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
