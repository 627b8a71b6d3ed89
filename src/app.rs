// src/app.rs
//! Router composition shared by the server binary and the HTTP tests

use axum::{
    extract::Extension,
    http::{header, Method},
    middleware, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::common::{AppState, ServerConfig, ValidatorRegistry};
use crate::{health, logging_middleware, users};

/// Builds the validator registry for every request type the API accepts
pub fn build_validators() -> ValidatorRegistry {
    let mut registry = ValidatorRegistry::new();
    users::register_validators(&mut registry);
    registry
}

pub fn build_app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        // ====================================================================
        // USER ROUTES
        // ====================================================================
        .merge(users::users_routes())
        // ====================================================================
        // HEALTH
        // ====================================================================
        .merge(health::health_routes());

    // ========================================================================
    // MIDDLEWARE AND LAYERS
    // ========================================================================

    if config.log_bodies {
        app = app.layer(middleware::from_fn(logging_middleware::log_request_response));
    }

    app.layer(Extension(state))
        .layer(
            CorsLayer::new()
                .allow_origin(config.cors_origins.clone())
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}
