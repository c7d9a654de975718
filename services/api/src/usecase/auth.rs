use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use vendo_auth_types::token::ACCESS_TOKEN_EXP;

use crate::domain::repository::UserRepository;
use crate::domain::types::{Profile, User, validate_email};
use crate::error::ApiServiceError;

/// JWT claims for access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(user: &User, secret: &str) -> Result<(String, u64), ApiServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = TokenClaims {
        sub: user.id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

pub fn hash_password(password: &str) -> Result<String, ApiServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// An unparseable stored hash reads as a mismatch, not an error.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignupOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct SignupUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> SignupUseCase<R> {
    pub async fn execute(&self, input: SignupInput) -> Result<SignupOutput, ApiServiceError> {
        if input.name.trim().is_empty() || input.password.is_empty() {
            return Err(ApiServiceError::MissingData);
        }
        if !validate_email(&input.email) {
            return Err(ApiServiceError::MissingData);
        }
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiServiceError::EmailTaken);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password_hash: hash_password(&input.password)?,
            created_at: now,
            updated_at: now,
        };
        let profile = Profile::default_for(user.id, now);
        self.repo.create_with_profile(&user, &profile).await?;

        let (access_token, access_token_exp) = issue_access_token(&user, &self.jwt_secret)?;
        Ok(SignupOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiServiceError> {
        // Unknown email and wrong password answer identically, so the
        // endpoint can't be used to probe which addresses have accounts.
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ApiServiceError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, &input.password) {
            return Err(ApiServiceError::InvalidCredentials);
        }

        let (access_token, access_token_exp) = issue_access_token(&user, &self.jwt_secret)?;
        Ok(LoginOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}
