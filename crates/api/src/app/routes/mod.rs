use axum::{Router, routing::get};

use crate::middleware;

pub mod accounts;
pub mod conversions;
pub mod costing;
pub mod ingredients;
pub mod public;
pub mod recipes;
pub mod reports;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/sessao",
            get(accounts::current_session)
                .route_layer(axum::middleware::from_fn(middleware::session_middleware)),
        )
        .merge(accounts::router())
        .merge(ingredients::router())
        .merge(recipes::router())
        .merge(costing::router())
        .merge(conversions::router())
        .merge(reports::router())
        .merge(public::router())
}
