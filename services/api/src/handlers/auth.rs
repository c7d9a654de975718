use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use vendo_auth_types::identity::Identity;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, SignupInput, SignupUseCase};
use crate::usecase::user::GetUserUseCase;

/// Token payload returned by both signup and login, so the client can go
/// straight to authenticated calls.
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: u64,
    pub user_id: String,
    pub name: String,
    pub email: String,
}

// ── POST /signup ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiServiceError> {
    let usecase = SignupUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.0.clone(),
    };
    let output = usecase
        .execute(SignupInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: output.access_token,
            expires_at: output.access_token_exp,
            user_id: output.user.id.to_string(),
            name: output.user.name,
            email: output.user.email,
        }),
    ))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiServiceError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.0.clone(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        token: output.access_token,
        expires_at: output.access_token_exp,
        user_id: output.user.id.to_string(),
        name: output.user.name,
        email: output.user.email,
    }))
}

// ── GET /me ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "vendo_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vendo_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(UserResponse {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }))
}
