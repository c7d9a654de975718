use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("missing or invalid field")]
    MissingData,
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("invalid webhook signature")]
    InvalidSignature,
    #[error("invalid webhook payload")]
    InvalidPayload,
    #[error("order not found")]
    OrderNotFound,
    #[error("address not found")]
    AddressNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials
            | Self::EmailTaken
            | Self::MissingData
            | Self::InvalidAmount
            | Self::InvalidSignature
            | Self::InvalidPayload => StatusCode::BAD_REQUEST,
            Self::OrderNotFound | Self::AddressNotFound | Self::UserNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
