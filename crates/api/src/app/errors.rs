use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use srcsync_infra::ReconcileError;

pub fn reconcile_error_to_response(err: ReconcileError) -> axum::response::Response {
    match err {
        ReconcileError::MalformedPayload(msg) => {
            json_error(StatusCode::BAD_REQUEST, "malformed_payload", msg)
        }
        ReconcileError::NotFoundForUpdate(key) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no product for {key}"),
        ),
        ReconcileError::DuplicateNaturalKey(key) => json_error(
            StatusCode::CONFLICT,
            "duplicate_natural_key",
            format!("{key} already exists"),
        ),
        ReconcileError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        ReconcileError::RepositoryUnavailable(msg) => {
            tracing::error!(error = %msg, "repository unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "repository_unavailable", msg)
        }
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
