//! Catalog read endpoints: search and fetch. Read lock only.

use std::sync::Arc;

use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use bookdepot_catalog::{FetchBooksParams, SearchBooksParams};

use crate::app::errors;
use crate::app::state::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/search-books", post(search_books))
        .route("/fetch-books", post(fetch_books))
}

pub async fn search_books(
    Extension(state): Extension<Arc<AppState>>,
    Json(params): Json<SearchBooksParams>,
) -> axum::response::Response {
    let store = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return errors::internal_error("inventory store lock poisoned"),
    };

    let page = store.search_books(&params);
    tracing::debug!(
        total = page.total,
        returned = page.books.len(),
        "search-books"
    );

    Json(page).into_response()
}

pub async fn fetch_books(
    Extension(state): Extension<Arc<AppState>>,
    Json(params): Json<FetchBooksParams>,
) -> axum::response::Response {
    let store = match state.store.read() {
        Ok(guard) => guard,
        Err(_) => return errors::internal_error("inventory store lock poisoned"),
    };

    Json(store.fetch_books(&params)).into_response()
}
