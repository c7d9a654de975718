use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use vendo_auth_types::identity::Identity;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase};

// ── GET /profile ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub avatar_url: Option<String>,
    pub theme: String,
    #[serde(serialize_with = "vendo_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, ApiServiceError> {
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(identity.user_id).await?;
    Ok(Json(ProfileResponse {
        user_id: profile.user_id.to_string(),
        avatar_url: profile.avatar_url,
        theme: profile.theme,
        updated_at: profile.updated_at,
    }))
}

// ── PATCH|PUT /profile ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub avatar_url: Option<String>,
    pub theme: Option<String>,
}

pub async fn update_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            UpdateProfileInput {
                avatar_url: body.avatar_url,
                theme: body.theme,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
