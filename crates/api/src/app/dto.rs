//! Result-record response shapes and mapping from domain results.
//!
//! Domain errors are part of the business contract, so they serialize as
//! `status: "error"` records on a 200 response; only transport faults use
//! HTTP error codes (see `errors.rs`).

use serde::Serialize;

use bookdepot_catalog::Book;
use bookdepot_core::{BookId, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Accepted,
    Error,
}

/// Outcome of add-book and update-book-details.
#[derive(Debug, Serialize)]
pub struct CatalogUpdateResponse {
    pub status: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CatalogUpdateResponse {
    pub fn from_result(result: DomainResult<Book>) -> Self {
        match result {
            Ok(book) => Self {
                status: ResultStatus::Accepted,
                book: Some(book),
                message: None,
            },
            Err(e) => Self {
                status: ResultStatus::Error,
                book: None,
                message: Some(e.to_string()),
            },
        }
    }
}

/// Outcome of update-inventory; always echoes the targeted book id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustmentResponse {
    pub book_id: BookId,
    pub status: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StockAdjustmentResponse {
    pub fn from_result(book_id: BookId, result: DomainResult<i64>) -> Self {
        match result {
            Ok(inventory) => Self {
                book_id,
                status: ResultStatus::Accepted,
                inventory: Some(inventory),
                message: None,
            },
            Err(e) => Self {
                book_id,
                status: ResultStatus::Error,
                inventory: None,
                message: Some(e.to_string()),
            },
        }
    }
}
