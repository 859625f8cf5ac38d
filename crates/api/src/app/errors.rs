//! Transport-level fault responses.
//!
//! Domain errors never reach this module; they travel inside result
//! records (`dto.rs`). This is for unexpected faults only, e.g. a
//! poisoned store lock after a handler panic.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Generic failure response for faults outside the business contract.
pub fn internal_error(message: impl Into<String>) -> axum::response::Response {
    let message = message.into();
    tracing::error!(%message, "internal fault");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
}
