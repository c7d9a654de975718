use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use vendo_domain::order::OrderStatus;

use crate::domain::repository::{CheckoutGateway, OrderRepository, UserRepository};
use crate::domain::types::{CheckoutSession, Order};
use crate::error::ApiServiceError;

// ── CreateCheckoutSession ────────────────────────────────────────────────────

pub struct CreateCheckoutSessionInput {
    pub amount: i64,
    pub currency: String,
}

pub struct CreateCheckoutSessionUseCase<G: CheckoutGateway> {
    pub gateway: G,
}

impl<G: CheckoutGateway> CreateCheckoutSessionUseCase<G> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateCheckoutSessionInput,
    ) -> Result<CheckoutSession, ApiServiceError> {
        if input.amount <= 0 {
            return Err(ApiServiceError::InvalidAmount);
        }
        self.gateway
            .create_session(user_id, input.amount, &input.currency)
            .await
    }
}

// ── ConfirmPayment (webhook) ─────────────────────────────────────────────────

/// Fields pulled out of a `checkout.session.completed` event.
pub struct CompletedSession {
    pub session_id: String,
    /// `metadata.user_id` as sent back by the provider.
    pub user_id: Option<String>,
    /// Provider-reported total in minor units. The only amount we trust.
    pub amount_total: Option<i64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    OrderCreated,
    /// An order for this session already exists; the event is a redelivery.
    Duplicate,
    /// The event was acknowledged but recorded nothing.
    Skipped,
}

pub struct ConfirmPaymentUseCase<U: UserRepository, O: OrderRepository> {
    pub users: U,
    pub orders: O,
}

impl<U: UserRepository, O: OrderRepository> ConfirmPaymentUseCase<U, O> {
    /// Record a paid order for a completed checkout session. Events that
    /// cannot be attributed are logged and acknowledged, not failed: the
    /// provider would retry them forever, and a retry cannot fix bad
    /// metadata. Only storage errors propagate.
    pub async fn execute(
        &self,
        session: CompletedSession,
    ) -> Result<ConfirmOutcome, ApiServiceError> {
        let Some(user_id) = session.user_id.as_deref().and_then(|v| v.parse::<Uuid>().ok())
        else {
            warn!(
                session_id = %session.session_id,
                "completed session without usable user_id metadata, skipping"
            );
            return Ok(ConfirmOutcome::Skipped);
        };

        if self.users.find_by_id(user_id).await?.is_none() {
            warn!(
                session_id = %session.session_id,
                %user_id,
                "completed session for unknown user, skipping"
            );
            return Ok(ConfirmOutcome::Skipped);
        }

        let Some(amount_total) = session.amount_total else {
            warn!(
                session_id = %session.session_id,
                "completed session without amount_total, skipping"
            );
            return Ok(ConfirmOutcome::Skipped);
        };

        let order = Order {
            id: Uuid::now_v7(),
            user_id,
            amount: amount_total,
            items: serde_json::json!([]),
            status: OrderStatus::Paid,
            checkout_session_id: Some(session.session_id),
            created_at: Utc::now(),
        };
        if self.orders.create_if_absent(&order).await? {
            Ok(ConfirmOutcome::OrderCreated)
        } else {
            Ok(ConfirmOutcome::Duplicate)
        }
    }
}
