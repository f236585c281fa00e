use crate::error::{Error, Result};
use std::sync::{Arc, Mutex};

/// The token triple produced by a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_id: Option<String>,
}

/// Shared handle to the credentials of the current session.
///
/// The store is an explicit dependency of every service rather than ambient
/// process state, so two stores can coexist (e.g. one per test) and a service
/// can only see the session it was constructed with. Clones share the same
/// underlying tokens.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<Mutex<AuthTokens>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a preset access token, mostly useful in tests and tools.
    pub fn with_access_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.save(AuthTokens {
            access_token: Some(token.into()),
            ..AuthTokens::default()
        });
        store
    }

    /// Merge `tokens` into the store. Fields that are `None` keep their
    /// previous value, so a token refresh that only carries a new access
    /// token does not wipe the user id.
    pub fn save(&self, tokens: AuthTokens) {
        let mut guard = self.inner.lock().unwrap();
        if tokens.access_token.is_some() {
            guard.access_token = tokens.access_token;
        }
        if tokens.refresh_token.is_some() {
            guard.refresh_token = tokens.refresh_token;
        }
        if tokens.user_id.is_some() {
            guard.user_id = tokens.user_id;
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.lock().unwrap().access_token.clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.lock().unwrap().user_id.clone()
    }

    /// True iff an access token is currently stored. Pure query.
    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().unwrap().access_token.is_some()
    }

    pub fn clear(&self) {
        *self.inner.lock().unwrap() = AuthTokens::default();
    }

    /// Access token or `Error::MissingCredential`, for the write paths where
    /// a missing token is a fatal precondition failure.
    pub(crate) fn require_access_token(&self) -> Result<String> {
        self.access_token().ok_or(Error::MissingCredential)
    }
}
