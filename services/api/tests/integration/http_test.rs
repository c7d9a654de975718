use axum_test::TestServer;
use hmac::{Hmac, Mac};
use sea_orm::{DatabaseBackend, MockDatabase};
use sha2::Sha256;

use vendo_api::config::ApiConfig;
use vendo_api::infra::stripe::StripeClient;
use vendo_api::router::build_router;
use vendo_api::state::AppState;
use vendo_auth_types::token::JwtSecret;

use crate::helpers::TEST_JWT_SECRET;

const WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Server over an empty mock database. Good for routes that reject before
/// touching storage; anything that queries would fail loudly.
fn test_server() -> TestServer {
    let config = ApiConfig {
        database_url: "postgres://unused".into(),
        jwt_secret: TEST_JWT_SECRET.into(),
        api_port: 0,
        stripe_secret_key: "sk_test_unused".into(),
        stripe_webhook_secret: WEBHOOK_SECRET.into(),
        checkout_success_url: "https://shop.example.com/success".into(),
        checkout_cancel_url: "https://shop.example.com/cancel".into(),
        checkout_currency: "usd".into(),
    };
    let state = AppState {
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        jwt_secret: JwtSecret(config.jwt_secret.clone()),
        stripe: StripeClient::new(&config),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn signature_header(payload: &[u8], secret: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp();
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(format!("{timestamp}.").as_bytes());
    mac.update(payload);
    format!("t={timestamp},v1={}", hex::encode(mac.finalize().into_bytes()))
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_health_without_auth() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

// ── Auth gate ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_protected_routes_without_token() {
    let server = test_server();
    for path in ["/me", "/profile", "/address", "/orders"] {
        let response = server.get(path).await;
        response.assert_status_unauthorized();
        let body: serde_json::Value = response.json();
        assert_eq!(body["kind"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn should_reject_garbage_bearer_token() {
    let server = test_server();
    let response = server
        .get("/me")
        .add_header("authorization", "Bearer not.a.jwt")
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn should_reject_non_bearer_authorization() {
    let server = test_server();
    let response = server
        .get("/me")
        .add_header("authorization", "Basic dXNlcjpwYXNz")
        .await;
    response.assert_status_unauthorized();
}

// ── Webhook signature gate ───────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_webhook_without_signature_header() {
    let server = test_server();
    let response = server
        .post("/stripe/webhook")
        .bytes(br#"{"type":"checkout.session.completed"}"#.to_vec().into())
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn should_reject_webhook_with_wrong_signature() {
    let server = test_server();
    let payload = br#"{"type":"checkout.session.completed"}"#;
    let response = server
        .post("/stripe/webhook")
        .add_header("stripe-signature", signature_header(payload, "whsec_other"))
        .bytes(payload.to_vec().into())
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn should_reject_signed_but_malformed_payload() {
    let server = test_server();
    let payload = b"not json";
    let response = server
        .post("/stripe/webhook")
        .add_header("stripe-signature", signature_header(payload, WEBHOOK_SECRET))
        .bytes(payload.to_vec().into())
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_PAYLOAD");
}

#[tokio::test]
async fn should_acknowledge_signed_event_of_other_type() {
    let server = test_server();
    let payload = br#"{"type":"invoice.paid","data":{"object":{"id":"in_1"}}}"#;
    let response = server
        .post("/stripe/webhook")
        .add_header("stripe-signature", signature_header(payload, WEBHOOK_SECRET))
        .bytes(payload.to_vec().into())
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn should_acknowledge_completed_session_without_metadata() {
    let server = test_server();
    let payload =
        br#"{"type":"checkout.session.completed","data":{"object":{"id":"cs_1","amount_total":500}}}"#;
    let response = server
        .post("/stripe/webhook")
        .add_header("stripe-signature", signature_header(payload, WEBHOOK_SECRET))
        .bytes(payload.to_vec().into())
        .await;
    response.assert_status_ok();
}
