use chrono::{DateTime, Utc};
use uuid::Uuid;

use vendo_domain::order::OrderStatus;

/// Account record owned by the API service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display preferences, one per user.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: Uuid,
    pub avatar_url: Option<String>,
    pub theme: String,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Defaults used at signup and when reading a never-written profile.
    pub fn default_for(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            avatar_url: None,
            theme: "light".to_string(),
            updated_at: now,
        }
    }
}

/// Current shipping/contact address, one per user.
#[derive(Debug, Clone)]
pub struct Address {
    pub user_id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
    pub updated_at: DateTime<Utc>,
}

/// A purchase. `checkout_session_id` is the idempotency key for
/// webhook-created orders; direct saves leave it unset.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub items: serde_json::Value,
    pub status: OrderStatus,
    pub checkout_session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A hosted checkout session created at the payment provider.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Validate an email address: non-empty local and domain parts around a
/// single '@', at most 254 chars. Deliverability is the mail server's
/// problem, not ours.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}
