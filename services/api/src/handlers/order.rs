use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vendo_auth_types::identity::Identity;
use vendo_domain::order::OrderStatus;
use vendo_domain::pagination::PageRequest;

use crate::domain::types::Order;
use crate::error::ApiServiceError;
use crate::pdf::render_invoice;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
};
use crate::usecase::user::GetUserUseCase;

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub amount: i64,
    pub items: serde_json::Value,
    pub status: OrderStatus,
    pub checkout_session_id: Option<String>,
    #[serde(serialize_with = "vendo_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            amount: order.amount,
            items: order.items,
            status: order.status,
            checkout_session_id: order.checkout_session_id,
            created_at: order.created_at,
        }
    }
}

// ── GET /orders ──────────────────────────────────────────────────────────────

pub async fn get_orders(
    identity: Identity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<OrderResponse>>, ApiServiceError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(identity.user_id, page).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── POST /orders ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub amount: i64,
    #[serde(default)]
    pub items: serde_json::Value,
}

pub async fn create_order(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiServiceError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase
        .execute(
            identity.user_id,
            CreateOrderInput {
                amount: body.amount,
                items: body.items,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── GET /orders/{id} ─────────────────────────────────────────────────────────

pub async fn get_order(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiServiceError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(id, identity.user_id).await?;
    Ok(Json(order.into()))
}

// ── GET /orders/{id}/invoice ─────────────────────────────────────────────────

pub async fn get_order_invoice(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiServiceError> {
    let order = GetOrderUseCase {
        repo: state.order_repo(),
    }
    .execute(id, identity.user_id)
    .await?;
    let user = GetUserUseCase {
        repo: state.user_repo(),
    }
    .execute(identity.user_id)
    .await?;

    let pdf = render_invoice(&order, &user)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"invoice-{}.pdf\"", order.id),
            ),
        ],
        pdf,
    )
        .into_response())
}
