//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository + reconciliation engine wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query DTOs and natural-key extraction
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with(Arc::new(services::AppServices::in_memory(config.reconcile.clone())))
}

/// Build the router around already-wired services.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
