//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repositories and the account service
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs, the JSON extractor and response mapping helpers
//! - `errors.rs`: `{erro}` error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(config: &AppConfig) -> Router {
    let services = Arc::new(services::build_services(config));

    Router::new()
        .route("/", get(routes::system::home))
        .nest("/api", routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
