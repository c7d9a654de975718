use axum::extract::State;
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

/// Handler for `GET /health` — liveness check.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check. Pings the database.
///
/// Mount with a state from which [`DatabaseConnection`] is `FromRef`.
pub async fn readyz(State(db): State<DatabaseConnection>) -> StatusCode {
    match db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
