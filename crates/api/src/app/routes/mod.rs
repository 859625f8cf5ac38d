use axum::{routing::get, Router};

pub mod catalog;
pub mod orders;
pub mod query;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(catalog::router())
        .merge(query::router())
        .merge(orders::router())
}
