use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use vendo_auth_types::identity::Identity;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::address::{GetAddressUseCase, SetAddressInput, SetAddressUseCase};

// ── GET /address ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AddressResponse {
    pub full_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
    #[serde(serialize_with = "vendo_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_address(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<AddressResponse>, ApiServiceError> {
    let usecase = GetAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase.execute(identity.user_id).await?;
    Ok(Json(AddressResponse {
        full_name: address.full_name,
        phone: address.phone,
        street: address.street,
        city: address.city,
        state: address.state,
        pincode: address.pincode,
        country: address.country,
        updated_at: address.updated_at,
    }))
}

// ── POST /address ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SetAddressRequest {
    pub full_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

pub async fn set_address(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<SetAddressRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = SetAddressUseCase {
        repo: state.address_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            SetAddressInput {
                full_name: body.full_name,
                phone: body.phone,
                street: body.street,
                city: body.city,
                state: body.state,
                pincode: body.pincode,
                country: body.country,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
