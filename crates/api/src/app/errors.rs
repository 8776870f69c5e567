use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use countsheet_core::DomainError;
use countsheet_report::ReportError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    }
}

/// Body that is not JSON or does not match the request shape.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

/// Report failures are internal errors; the message carries the cause.
pub fn report_error_to_response(err: ReportError) -> axum::response::Response {
    tracing::error!(error = %err, "count sheet generation failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "report_error",
        format!("failed to generate count sheet: {err}"),
    )
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
