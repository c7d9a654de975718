//! Bearer-token identity extractor.

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::token::{JwtSecret, validate_access_token};

/// Caller identity resolved from `Authorization: Bearer <token>`.
///
/// Protected handlers take this as a parameter; public routes simply do
/// not. Missing, malformed, or expired credentials are rejected with 401
/// before the handler runs. This is the only authentication gate.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

/// 401 rejection with the same JSON shape as service errors.
#[derive(Debug)]
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHORIZED",
            "message": "unauthorized",
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = Unauthorized;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);

        let user_id = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .and_then(|token| validate_access_token(token, &secret.0).ok())
            .map(|info| info.user_id);

        async move {
            let user_id = user_id.ok_or(Unauthorized)?;
            Ok(Self { user_id })
        }
    }
}
