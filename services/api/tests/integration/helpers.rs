use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use vendo_api::domain::repository::{
    AddressRepository, CheckoutGateway, OrderRepository, ProfileRepository, UserRepository,
};
use vendo_api::domain::types::{Address, CheckoutSession, Order, Profile, User};
use vendo_api::error::ApiServiceError;
use vendo_api::usecase::auth::hash_password;
use vendo_domain::pagination::PageRequest;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create_with_profile(
        &self,
        user: &User,
        _profile: &Profile,
    ) -> Result<(), ApiServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub profiles: Mutex<Vec<Profile>>,
}

impl MockProfileRepo {
    pub fn empty() -> Self {
        Self {
            profiles: Mutex::new(vec![]),
        }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ApiServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), ApiServiceError> {
        let mut profiles = self.profiles.lock().unwrap();
        profiles.retain(|p| p.user_id != profile.user_id);
        profiles.push(profile.clone());
        Ok(())
    }
}

// ── MockAddressRepo ──────────────────────────────────────────────────────────

pub struct MockAddressRepo {
    pub addresses: Mutex<Vec<Address>>,
}

impl MockAddressRepo {
    pub fn empty() -> Self {
        Self {
            addresses: Mutex::new(vec![]),
        }
    }
}

impl AddressRepository for MockAddressRepo {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Address>, ApiServiceError> {
        Ok(self
            .addresses
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, address: &Address) -> Result<(), ApiServiceError> {
        let mut addresses = self.addresses.lock().unwrap();
        addresses.retain(|a| a.user_id != address.user_id);
        addresses.push(address.clone());
        Ok(())
    }
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

/// In-memory order store enforcing the same checkout-session uniqueness the
/// database schema does.
pub struct MockOrderRepo {
    pub orders: Arc<Mutex<Vec<Order>>>,
    sessions: Mutex<HashSet<String>>,
}

impl MockOrderRepo {
    pub fn empty() -> Self {
        Self {
            orders: Arc::new(Mutex::new(vec![])),
            sessions: Mutex::new(HashSet::new()),
        }
    }

    pub fn orders_handle(&self) -> Arc<Mutex<Vec<Order>>> {
        Arc::clone(&self.orders)
    }

    /// A repo view over an existing order list, as handed out by
    /// [`orders_handle`](Self::orders_handle).
    pub fn with_orders(orders: Arc<Mutex<Vec<Order>>>) -> Self {
        Self {
            orders,
            sessions: Mutex::new(HashSet::new()),
        }
    }
}

impl OrderRepository for MockOrderRepo {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let page = page.clamped();
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<Order>, ApiServiceError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id && o.user_id == user_id)
            .cloned())
    }

    async fn create(&self, order: &Order) -> Result<(), ApiServiceError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn create_if_absent(&self, order: &Order) -> Result<bool, ApiServiceError> {
        if let Some(ref sid) = order.checkout_session_id {
            if !self.sessions.lock().unwrap().insert(sid.clone()) {
                return Ok(false);
            }
        }
        self.orders.lock().unwrap().push(order.clone());
        Ok(true)
    }
}

// ── StubCheckoutGateway ──────────────────────────────────────────────────────

/// Gateway that hands out deterministic sessions and records what it was
/// asked to create.
pub struct StubCheckoutGateway {
    pub requests: Mutex<Vec<(Uuid, i64, String)>>,
}

impl StubCheckoutGateway {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(vec![]),
        }
    }
}

impl CheckoutGateway for StubCheckoutGateway {
    async fn create_session(
        &self,
        user_id: Uuid,
        amount: i64,
        currency: &str,
    ) -> Result<CheckoutSession, ApiServiceError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push((user_id, amount, currency.to_owned()));
        let n = requests.len();
        Ok(CheckoutSession {
            id: format!("cs_test_{n}"),
            url: format!("https://checkout.example.com/c/pay/cs_test_{n}"),
        })
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(email: &str, password: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        name: "Test User".to_owned(),
        email: email.to_owned(),
        password_hash: hash_password(password).unwrap(),
        created_at: now,
        updated_at: now,
    }
}
