//! Liveness endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

#[derive(Clone)]
struct HealthState {
    service_name: Arc<str>,
}

/// GET /health
async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.to_string(),
    })
}

pub fn health_router(service_name: impl Into<Arc<str>>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(HealthState {
            service_name: service_name.into(),
        })
}
