use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::domain::repository::CheckoutGateway;
use crate::domain::types::CheckoutSession;
use crate::error::ApiServiceError;

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Signed webhook timestamps older than this are replays.
const SIGNATURE_TOLERANCE_SECS: u64 = 300;

/// Thin client for the hosted checkout provider. Holds the HTTP client and
/// the two secrets: one for API calls, one for webhook signatures.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    webhook_secret: String,
    success_url: String,
    cancel_url: String,
    currency: String,
}

impl StripeClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.stripe_secret_key.clone(),
            webhook_secret: config.stripe_webhook_secret.clone(),
            success_url: config.checkout_success_url.clone(),
            cancel_url: config.checkout_cancel_url.clone(),
            currency: config.checkout_currency.clone(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Check the `stripe-signature` header against the raw request body.
    /// Any parse failure reads as invalid; the caller rejects with 400.
    pub fn verify_webhook_signature(&self, payload: &[u8], header: &str) -> bool {
        let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs(),
            Err(_) => return false,
        };
        verify_signature(
            payload,
            header,
            &self.webhook_secret,
            now,
            SIGNATURE_TOLERANCE_SECS,
        )
    }
}

#[derive(Deserialize)]
struct SessionResponse {
    id: String,
    url: String,
}

impl CheckoutGateway for StripeClient {
    async fn create_session(
        &self,
        user_id: Uuid,
        amount: i64,
        currency: &str,
    ) -> Result<CheckoutSession, ApiServiceError> {
        let user_id = user_id.to_string();
        let amount = amount.to_string();
        let params: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("success_url", &self.success_url),
            ("cancel_url", &self.cancel_url),
            ("line_items[0][price_data][currency]", currency),
            ("line_items[0][price_data][product_data][name]", "Order"),
            ("line_items[0][price_data][unit_amount]", &amount),
            ("line_items[0][quantity]", "1"),
            ("metadata[user_id]", &user_id),
        ];

        let resp = self
            .http
            .post(CHECKOUT_SESSIONS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .context("send checkout session request")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "checkout session request failed with {status}: {body}"
            )
            .into());
        }

        let session: SessionResponse = resp
            .json()
            .await
            .context("decode checkout session response")?;
        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }
}

// ── Signature verification ───────────────────────────────────────────────────

type HmacSha256 = Hmac<Sha256>;

/// Verify a `t=<ts>,v1=<hex>` signature header: HMAC-SHA256 over
/// `"{t}.{payload}"` keyed by `secret`, with `t` within `tolerance` of `now`.
/// A header may carry several `v1` entries during secret rotation; any match
/// passes.
fn verify_signature(payload: &[u8], header: &str, secret: &str, now: u64, tolerance: u64) -> bool {
    let mut timestamp: Option<u64> = None;
    let mut signatures: Vec<Vec<u8>> = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => timestamp = value.parse().ok(),
            "v1" => {
                if let Ok(sig) = hex::decode(value) {
                    signatures.push(sig);
                }
            }
            _ => {}
        }
    }

    let Some(timestamp) = timestamp else {
        return false;
    };
    if signatures.is_empty() {
        return false;
    }
    if now.abs_diff(timestamp) > tolerance {
        return false;
    }

    signatures.iter().any(|sig| {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac.verify_slice(sig).is_ok()
    })
}
