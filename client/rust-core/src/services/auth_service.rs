use crate::credentials::{AuthTokens, CredentialStore};
use crate::error::Result;
use crate::gateway::{ops, CommandGateway};
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// Login, registration and session queries. On a successful login the
/// returned tokens are saved into the credential store this service was
/// constructed with, which makes every sibling service authenticated.
pub struct AuthService {
    gateway: Arc<dyn CommandGateway>,
    credentials: CredentialStore,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        // No token attached: this call is what produces one
        let response: AuthResponse = super::invoke_decoded(
            self.gateway.as_ref(),
            ops::LOGIN_USER,
            json!({ "email": request.email, "password": request.password }),
        )
        .await?;

        self.store_tokens(&response);
        Ok(response)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<AuthResponse> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            username: username.to_string(),
        };
        request.validate()?;

        let response: AuthResponse = super::invoke_decoded(
            self.gateway.as_ref(),
            ops::REGISTER_USER,
            json!({
                "email": request.email,
                "password": request.password,
                "username": request.username,
            }),
        )
        .await?;

        // Tokens may be absent here: some deployments require email
        // confirmation before the first login
        self.store_tokens(&response);
        Ok(response)
    }

    /// Whether the stored session belongs to an administrator. Any failure -
    /// missing token, gateway error, odd payload - answers `false`.
    pub async fn is_admin(&self) -> bool {
        let Some(token) = self.credentials.access_token() else {
            return false;
        };

        match self
            .gateway
            .invoke(ops::CHECK_IS_ADMIN, json!({ "accessToken": token }))
            .await
        {
            Ok(value) => value.as_bool().unwrap_or(false),
            Err(err) => {
                tracing::warn!("check_is_admin failed ({}), assuming non-admin", err);
                false
            }
        }
    }

    pub fn logout(&self) {
        self.credentials.clear();
        tracing::info!("Session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    fn store_tokens(&self, response: &AuthResponse) {
        if !response.success {
            return;
        }
        self.credentials.save(AuthTokens {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            user_id: response.user_id.clone(),
        });
    }
}
