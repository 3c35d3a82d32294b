use axum::http::StatusCode;

/// Liveness only; does not touch the database.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
