use axum::{
    Router,
    routing::{get, patch, post, put},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use vendo_core::health::{health, readyz};
use vendo_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    address::{get_address, set_address},
    auth::{get_me, login, signup},
    checkout::{create_checkout_session, stripe_webhook},
    order::{create_order, get_order, get_order_invoice, get_orders},
    profile::{get_profile, update_profile},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        .route("/readyz", get(readyz))
        // Auth
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(get_me))
        // Profile
        .route("/profile", get(get_profile))
        .route("/profile", patch(update_profile))
        .route("/profile", put(update_profile))
        // Address
        .route("/address", get(get_address))
        .route("/address", post(set_address))
        // Orders
        .route("/orders", get(get_orders))
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/invoice", get(get_order_invoice))
        // Checkout
        .route("/create-checkout-session", post(create_checkout_session))
        .route("/stripe/webhook", post(stripe_webhook))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(propagate_request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
