#![allow(async_fn_in_trait)]

use uuid::Uuid;

use vendo_domain::pagination::PageRequest;

use crate::domain::types::{Address, CheckoutSession, Order, Profile, User};
use crate::error::ApiServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;

    /// Insert a user and their default profile atomically (same transaction).
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
    ) -> Result<(), ApiServiceError>;
}

/// Repository for display profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ApiServiceError>;

    /// Insert or replace the user's profile.
    async fn upsert(&self, profile: &Profile) -> Result<(), ApiServiceError>;
}

/// Repository for the current address.
pub trait AddressRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Address>, ApiServiceError>;

    /// Insert or replace the user's address.
    async fn upsert(&self, address: &Address) -> Result<(), ApiServiceError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    /// List a user's orders, newest first.
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError>;

    /// Owner-scoped lookup. Another user's order id reads as absent.
    async fn find_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<Order>, ApiServiceError>;

    async fn create(&self, order: &Order) -> Result<(), ApiServiceError>;

    /// Insert unless an order with the same checkout session id exists.
    /// Returns `true` if a row was inserted, `false` on conflict.
    async fn create_if_absent(&self, order: &Order) -> Result<bool, ApiServiceError>;
}

/// Port for the hosted payment provider.
pub trait CheckoutGateway: Send + Sync {
    /// Create a hosted checkout session for `amount` minor units, tagging
    /// it with the user id so the webhook can attribute the payment.
    async fn create_session(
        &self,
        user_id: Uuid,
        amount: i64,
        currency: &str,
    ) -> Result<CheckoutSession, ApiServiceError>;
}
