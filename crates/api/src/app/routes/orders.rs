//! Order fulfillment endpoint.

use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use bookdepot_catalog::FulfillmentParams;

use crate::app::errors;
use crate::app::state::AppState;

pub fn router() -> Router {
    Router::new().route("/fulfill-orders", post(fulfill_orders))
}

pub async fn fulfill_orders(
    Extension(state): Extension<Arc<AppState>>,
    Json(params): Json<FulfillmentParams>,
) -> axum::response::Response {
    // The write lock spans the whole batch: each order's check and apply
    // phases must not interleave with other mutations.
    let mut store = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return errors::internal_error("inventory store lock poisoned"),
    };

    let result = store.fulfill_orders(params);
    drop(store);

    let rejected = result.orders.iter().filter(|o| !o.is_accepted()).count();
    if rejected > 0 {
        tracing::warn!(
            rejected,
            total = result.orders.len(),
            "fulfillment batch had rejected orders"
        );
    } else {
        tracing::info!(total = result.orders.len(), "fulfillment batch accepted");
    }

    Json(result).into_response()
}
