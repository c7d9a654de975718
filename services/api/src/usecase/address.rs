use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::AddressRepository;
use crate::domain::types::Address;
use crate::error::ApiServiceError;

// ── GetAddress ───────────────────────────────────────────────────────────────

pub struct GetAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> GetAddressUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Address, ApiServiceError> {
        self.repo
            .find_by_user(user_id)
            .await?
            .ok_or(ApiServiceError::AddressNotFound)
    }
}

// ── SetAddress ───────────────────────────────────────────────────────────────

pub struct SetAddressInput {
    pub full_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

pub struct SetAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> SetAddressUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: SetAddressInput,
    ) -> Result<(), ApiServiceError> {
        let fields = [
            &input.full_name,
            &input.phone,
            &input.street,
            &input.city,
            &input.state,
            &input.pincode,
            &input.country,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ApiServiceError::MissingData);
        }
        let address = Address {
            user_id,
            full_name: input.full_name,
            phone: input.phone,
            street: input.street,
            city: input.city,
            state: input.state,
            pincode: input.pincode,
            country: input.country,
            updated_at: Utc::now(),
        };
        self.repo.upsert(&address).await
    }
}
