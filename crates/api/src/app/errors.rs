use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use beerstock_core::DomainError;
use beerstock_stock::StockError;

pub fn stock_error_to_response(err: StockError) -> axum::response::Response {
    match err {
        StockError::AlreadyRegistered { .. } => {
            json_error(StatusCode::BAD_REQUEST, "already_registered", err.to_string())
        }
        StockError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        StockError::StockExceeded { .. } => {
            json_error(StatusCode::BAD_REQUEST, "stock_exceeded", err.to_string())
        }
        StockError::Invalid(e) => domain_error_to_response(e),
        StockError::Store(e) => {
            tracing::error!(error = %e, "record store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

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
