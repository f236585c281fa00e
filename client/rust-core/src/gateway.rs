use crate::config::Config;
use crate::error::GatewayError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Remote operation names understood by the backend command interface.
pub mod ops {
    pub const GET_ALL_COURSES: &str = "get_all_courses";
    pub const GET_LESSON_BY_ID: &str = "get_lesson_by_id";
    pub const CREATE_COURSE: &str = "create_course";
    pub const CREATE_MODULE: &str = "create_module";
    pub const CREATE_LESSON: &str = "create_lesson";
    pub const UPDATE_COURSE: &str = "update_course";
    pub const UPDATE_MODULE: &str = "update_module";
    pub const UPDATE_LESSON: &str = "update_lesson";
    pub const DELETE_COURSE: &str = "delete_course";
    pub const DELETE_MODULE: &str = "delete_module";
    pub const DELETE_LESSON: &str = "delete_lesson";
    pub const VALIDATE_CODE: &str = "validate_code";
    pub const GET_USER_PROGRESS: &str = "get_user_progress";
    pub const UPDATE_LESSON_PROGRESS: &str = "update_lesson_progress";
    pub const GET_USER_PROFILE: &str = "get_user_profile";
    pub const GET_USER_STATISTICS: &str = "get_user_statistics";
    pub const UPDATE_USER_AVATAR: &str = "update_user_avatar";
    pub const UPDATE_USER_USERNAME: &str = "update_user_username";
    pub const GET_AVAILABLE_ACHIEVEMENTS: &str = "get_available_achievements";
    pub const GET_USER_ACHIEVEMENTS: &str = "get_user_achievements";
    pub const CHECK_AND_UNLOCK_ACHIEVEMENTS: &str = "check_and_unlock_achievements";
    pub const SEARCH_LESSONS: &str = "search_lessons";
    pub const LOGIN_USER: &str = "login_user";
    pub const REGISTER_USER: &str = "register_user";
    pub const CHECK_IS_ADMIN: &str = "check_is_admin";
}

/// Boundary through which every backend operation is invoked.
///
/// `args` is the full argument object for the named operation; authenticated
/// operations carry the access token under the backend's `accessToken` key.
/// Implementations perform exactly one attempt per call - no retries, no
/// backoff. Timeout behavior belongs to the implementation.
#[async_trait]
pub trait CommandGateway: Send + Sync {
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value, GatewayError>;
}

/// Production gateway: POSTs the argument object to
/// `{gateway_url}/commands/{operation}` with the configured API key.
pub struct HttpGateway {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    request_timeout: Duration,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.gateway_url.trim_end_matches('/').to_string(),
            api_key: config.gateway_api_key.clone(),
            client: reqwest::Client::new(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl CommandGateway for HttpGateway {
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value, GatewayError> {
        let url = format!("{}/commands/{}", self.base_url, operation);

        tracing::debug!("Invoking remote operation {} at {}", operation, url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&args)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to parse response: {}", e)))
    }
}
