//! Catalog mutation endpoints: add, update details, adjust stock.
//!
//! Every handler takes the write lock for the full extent of its single
//! store call and responds 200 with a result record; only a poisoned lock
//! becomes an HTTP-level failure.

use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use bookdepot_catalog::{AddBookParams, StockAdjustment, UpdateBookParams};

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/add-book", post(add_book))
        .route("/update-book-details", post(update_book_details))
        .route("/update-inventory", post(update_inventory))
}

pub async fn add_book(
    Extension(state): Extension<Arc<AppState>>,
    Json(params): Json<AddBookParams>,
) -> axum::response::Response {
    let mut store = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return errors::internal_error("inventory store lock poisoned"),
    };

    let result = store.add_book(params);
    match &result {
        Ok(book) => tracing::info!(id = %book.id, title = %book.title, "book added"),
        Err(e) => tracing::debug!(error = %e, "add-book rejected"),
    }

    Json(dto::CatalogUpdateResponse::from_result(result)).into_response()
}

pub async fn update_book_details(
    Extension(state): Extension<Arc<AppState>>,
    Json(params): Json<UpdateBookParams>,
) -> axum::response::Response {
    let mut store = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return errors::internal_error("inventory store lock poisoned"),
    };

    let result = store.update_book_details(params);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "update-book-details rejected");
    }

    Json(dto::CatalogUpdateResponse::from_result(result)).into_response()
}

pub async fn update_inventory(
    Extension(state): Extension<Arc<AppState>>,
    Json(params): Json<StockAdjustment>,
) -> axum::response::Response {
    let book_id = params.book_id;

    let mut store = match state.store.write() {
        Ok(guard) => guard,
        Err(_) => return errors::internal_error("inventory store lock poisoned"),
    };

    let result = store.adjust_inventory(params);
    match &result {
        Ok(inventory) => tracing::info!(%book_id, inventory, "inventory adjusted"),
        Err(e) => tracing::debug!(%book_id, error = %e, "update-inventory rejected"),
    }

    Json(dto::StockAdjustmentResponse::from_result(book_id, result)).into_response()
}
