//! Router assembly
//!
//! Mounts the health and user routes and applies the HTTP layers.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::health::health_router;

/// Build the full application from already-stateful user routes
pub fn build_app(user_routes: Router, config: &ApiConfig) -> Router {
    Router::new()
        .merge(health_router(config.service_name.as_str()))
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.allowed_origins.clone()))
}

fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}
