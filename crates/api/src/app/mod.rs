//! HTTP API application wiring (Axum router + store injection).
//!
//! Layout:
//! - `state.rs`: the owned inventory store behind its writer lock
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: result-record response shapes and mapping helpers
//! - `errors.rs`: consistent fault responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

/// Build the full HTTP router around an injected store (public entrypoint
/// used by `main.rs` and the black-box tests).
pub fn build_app(store: bookdepot_catalog::InventoryStore) -> Router {
    let state = Arc::new(state::AppState::new(store));

    routes::router().layer(ServiceBuilder::new().layer(Extension(state)))
}
