use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::gateway::{ops, CommandGateway};
use crate::models::user::Achievement;
use serde_json::json;
use std::sync::Arc;

/// Thin wrapper over the backend's achievement operations.
pub struct AchievementService {
    gateway: Arc<dyn CommandGateway>,
    credentials: CredentialStore,
}

impl AchievementService {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    /// Every achievement that exists, unlocked or not.
    pub async fn available(&self) -> Result<Vec<Achievement>> {
        let token = self.credentials.require_access_token()?;

        super::invoke_decoded(
            self.gateway.as_ref(),
            ops::GET_AVAILABLE_ACHIEVEMENTS,
            json!({ "accessToken": token }),
        )
        .await
    }

    pub async fn user_achievements(&self, user_id: &str) -> Result<Vec<Achievement>> {
        let token = self.credentials.require_access_token()?;

        super::invoke_decoded(
            self.gateway.as_ref(),
            ops::GET_USER_ACHIEVEMENTS,
            json!({ "userId": user_id, "accessToken": token }),
        )
        .await
    }

    /// Ask the backend to evaluate unlock conditions; returns the
    /// achievements newly unlocked by this call.
    pub async fn check_and_unlock(&self, user_id: &str) -> Result<Vec<Achievement>> {
        let token = self.credentials.require_access_token()?;

        super::invoke_decoded(
            self.gateway.as_ref(),
            ops::CHECK_AND_UNLOCK_ACHIEVEMENTS,
            json!({ "userId": user_id, "accessToken": token }),
        )
        .await
    }
}
