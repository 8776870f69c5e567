//! HTTP API application wiring (Axum router).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and mapping to domain types
//! - `errors.rs`: consistent error responses

use axum::{Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_id_middleware)))
}
