use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cropwise_ai::AiError;
use cropwise_core::DomainError;
use cropwise_market::MarketError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
}

pub fn ai_error_to_response(err: AiError) -> axum::response::Response {
    match err {
        AiError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        e @ AiError::InputShape { .. } => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "input_shape_error", e.to_string())
        }
        AiError::InferenceFailed(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "inference_failed", msg)
        }
    }
}

pub fn market_error_to_response(err: MarketError) -> axum::response::Response {
    match err {
        e @ MarketError::EmptyWindow => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        // `days` was already bounded by the handler; the clock is at fault.
        e @ MarketError::DateOutOfRange { .. } => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "date_out_of_range", e.to_string())
        }
    }
}

/// Malformed or incomplete JSON body. Keeps axum's status (422 for a body
/// that does not match the schema, 400 for broken JSON, 415 without a JSON
/// content type).
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let message = message.into();
    tracing::warn!(status = status.as_u16(), code, %message, "request rejected");
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message,
        })),
    )
        .into_response()
}
