use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::Profile;
use crate::error::ApiServiceError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    /// A user who never wrote a profile still has one: the defaults.
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, ApiServiceError> {
        let profile = self
            .repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| Profile::default_for(user_id, Utc::now()));
        Ok(profile)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub avatar_url: Option<String>,
    pub theme: Option<String>,
}

pub struct UpdateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> UpdateProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<(), ApiServiceError> {
        if input.avatar_url.is_none() && input.theme.is_none() {
            return Err(ApiServiceError::MissingData);
        }
        let now = Utc::now();
        let mut profile = self
            .repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| Profile::default_for(user_id, now));
        if let Some(avatar_url) = input.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }
        if let Some(theme) = input.theme {
            profile.theme = theme;
        }
        profile.updated_at = now;
        self.repo.upsert(&profile).await
    }
}
