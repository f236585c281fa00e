use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::gateway::{ops, CommandGateway};
use crate::models::user::{UserProfile, UserStatistics};
use serde_json::json;
use std::sync::Arc;

/// Thin wrapper over the backend's profile operations. Gamification numbers
/// the backend leaves null come back default-filled (see `UserProfile`).
pub struct ProfileService {
    gateway: Arc<dyn CommandGateway>,
    credentials: CredentialStore,
}

impl ProfileService {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    pub async fn user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let token = self.credentials.require_access_token()?;

        super::invoke_decoded(
            self.gateway.as_ref(),
            ops::GET_USER_PROFILE,
            json!({ "userId": user_id, "accessToken": token }),
        )
        .await
    }

    pub async fn user_statistics(&self, user_id: &str) -> Result<UserStatistics> {
        let token = self.credentials.require_access_token()?;

        super::invoke_decoded(
            self.gateway.as_ref(),
            ops::GET_USER_STATISTICS,
            json!({ "userId": user_id, "accessToken": token }),
        )
        .await
    }

    pub async fn update_avatar(&self, user_id: &str, avatar_url: &str) -> Result<()> {
        let token = self.credentials.require_access_token()?;

        super::invoke_raw(
            self.gateway.as_ref(),
            ops::UPDATE_USER_AVATAR,
            json!({ "userId": user_id, "avatarUrl": avatar_url, "accessToken": token }),
        )
        .await?;

        Ok(())
    }

    pub async fn update_username(&self, user_id: &str, username: &str) -> Result<()> {
        let token = self.credentials.require_access_token()?;

        super::invoke_raw(
            self.gateway.as_ref(),
            ops::UPDATE_USER_USERNAME,
            json!({ "userId": user_id, "username": username, "accessToken": token }),
        )
        .await?;

        Ok(())
    }
}
