use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::gateway::{ops, CommandGateway};
use crate::models::progress::{ProgressStatus, ProgressUpdate, UserProgress};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// Thin wrapper over the backend's progress operations. Every method needs a
/// session; remote failures propagate.
pub struct ProgressService {
    gateway: Arc<dyn CommandGateway>,
    credentials: CredentialStore,
}

impl ProgressService {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    pub async fn user_progress(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        let token = self.credentials.require_access_token()?;

        super::invoke_decoded(
            self.gateway.as_ref(),
            ops::GET_USER_PROGRESS,
            json!({ "userId": user_id, "accessToken": token }),
        )
        .await
    }

    /// Record a submission for a lesson. The completion timestamp is stamped
    /// here, from the local clock, when the status transitions to completed -
    /// the backend's opinion of "now" is not consulted. Attempts default
    /// to 1.
    pub async fn update_lesson_progress(
        &self,
        user_id: &str,
        lesson_id: &str,
        status: ProgressStatus,
        update: ProgressUpdate,
    ) -> Result<UserProgress> {
        let token = self.credentials.require_access_token()?;

        let completed_at = matches!(status, ProgressStatus::Completed).then(Utc::now);

        let args = json!({
            "progress": {
                "user_id": user_id,
                "lesson_id": lesson_id,
                "status": status,
                "score": update.score,
                "attempts": update.attempts.unwrap_or(1),
                "completed_at": completed_at,
                "time_spent_seconds": update.time_spent_seconds,
            },
            "accessToken": token,
        });

        tracing::debug!(
            "Submitting progress: user={}, lesson={}, status={:?}",
            user_id,
            lesson_id,
            status
        );

        super::invoke_decoded(self.gateway.as_ref(), ops::UPDATE_LESSON_PROGRESS, args).await
    }
}
