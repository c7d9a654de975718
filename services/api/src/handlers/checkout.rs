use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::{Deserialize, Serialize};

use vendo_auth_types::identity::Identity;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::checkout::{
    CompletedSession, ConfirmPaymentUseCase, CreateCheckoutSessionInput,
    CreateCheckoutSessionUseCase,
};

// ── POST /create-checkout-session ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCheckoutSessionRequest {
    pub amount: i64,
}

#[derive(Serialize)]
pub struct CheckoutSessionResponse {
    pub id: String,
    pub url: String,
}

pub async fn create_checkout_session(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateCheckoutSessionRequest>,
) -> Result<Json<CheckoutSessionResponse>, ApiServiceError> {
    let currency = state.stripe.currency().to_string();
    let usecase = CreateCheckoutSessionUseCase {
        gateway: state.stripe.clone(),
    };
    let session = usecase
        .execute(
            identity.user_id,
            CreateCheckoutSessionInput {
                amount: body.amount,
                currency,
            },
        )
        .await?;
    Ok(Json(CheckoutSessionResponse {
        id: session.id,
        url: session.url,
    }))
}

// ── POST /stripe/webhook ─────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WebhookEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: WebhookData,
}

#[derive(Deserialize)]
struct WebhookData {
    object: serde_json::Value,
}

#[derive(Deserialize)]
struct SessionObject {
    id: String,
    #[serde(default)]
    metadata: SessionMetadata,
    amount_total: Option<i64>,
}

#[derive(Deserialize, Default)]
struct SessionMetadata {
    user_id: Option<String>,
}

/// Unauthenticated by design; the signature is the authentication. The raw
/// body must be verified before any parsing, so this takes `Bytes`, not
/// `Json`.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiServiceError> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiServiceError::InvalidSignature)?;
    if !state.stripe.verify_webhook_signature(&body, signature) {
        return Err(ApiServiceError::InvalidSignature);
    }

    let event: WebhookEvent =
        serde_json::from_slice(&body).map_err(|_| ApiServiceError::InvalidPayload)?;
    if event.event_type != "checkout.session.completed" {
        // Verified but irrelevant; acknowledge so the provider stops retrying.
        return Ok(StatusCode::OK);
    }
    let object: SessionObject =
        serde_json::from_value(event.data.object).map_err(|_| ApiServiceError::InvalidPayload)?;

    let usecase = ConfirmPaymentUseCase {
        users: state.user_repo(),
        orders: state.order_repo(),
    };
    usecase
        .execute(CompletedSession {
            session_id: object.id,
            user_id: object.metadata.user_id,
            amount_total: object.amount_total,
        })
        .await?;
    Ok(StatusCode::OK)
}
