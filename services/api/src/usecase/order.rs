use chrono::Utc;
use uuid::Uuid;

use vendo_domain::order::OrderStatus;
use vendo_domain::pagination::PageRequest;

use crate::domain::repository::OrderRepository;
use crate::domain::types::Order;
use crate::error::ApiServiceError;

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        self.repo.list_by_user(user_id, page).await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    /// Owner-scoped: another user's order id reads as not found.
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> Result<Order, ApiServiceError> {
        self.repo
            .find_by_id(id, user_id)
            .await?
            .ok_or(ApiServiceError::OrderNotFound)
    }
}

// ── CreateOrder (direct save, no checkout) ───────────────────────────────────

pub struct CreateOrderInput {
    pub amount: i64,
    pub items: serde_json::Value,
}

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateOrderInput,
    ) -> Result<Order, ApiServiceError> {
        if input.amount <= 0 {
            return Err(ApiServiceError::InvalidAmount);
        }
        let order = Order {
            id: Uuid::now_v7(),
            user_id,
            amount: input.amount,
            items: input.items,
            status: OrderStatus::Pending,
            checkout_session_id: None,
            created_at: Utc::now(),
        };
        self.repo.create(&order).await?;
        Ok(order)
    }
}
