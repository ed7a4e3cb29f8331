//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: collaborator wiring and per-endpoint orchestration
//! - `routes/`: HTTP handlers (one file per endpoint)
//! - `dto.rs`: query-string DTOs and parsing helpers
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
pub fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let services = services::build_services(config)?;
    Ok(build_app_with(services))
}

/// Router over an already wired set of services; tests plug their own
/// collaborators in through here.
pub fn build_app_with(services: services::AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(Arc::new(services))),
        )
}
