use axum::http::StatusCode;

/// Handler for `GET /healthz`: the process is up and serving requests.
///
/// Readiness depends on the backing stores, so each service provides its own `/readyz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
