use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gastro_accounts::AccountError;
use gastro_core::DomainError;

/// Every error body has the shape `{"erro": "<message>"}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "erro": message.into() }))).into_response()
}

pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "recurso não encontrado"),
        e @ (DomainError::Validation(_) | DomainError::UnsupportedUnit(_) | DomainError::InvalidMargin(_)) => {
            json_error(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

pub fn account_error_to_response(err: AccountError) -> Response {
    match err {
        AccountError::Validation(_) | AccountError::DuplicateEmail => {
            json_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        AccountError::InvalidCredentials | AccountError::InvalidSession(_) => {
            json_error(StatusCode::UNAUTHORIZED, err.to_string())
        }
        AccountError::Internal(msg) => {
            tracing::error!(error = %msg, "account operation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "erro interno")
        }
    }
}
