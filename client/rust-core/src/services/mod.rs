use crate::credentials::CredentialStore;
use crate::error::{Error, Result};
use crate::gateway::CommandGateway;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

pub mod achievement_service;
pub mod auth_service;
pub mod course_service;
pub mod profile_service;
pub mod progress_service;
pub mod validation_service;

pub use achievement_service::AchievementService;
pub use auth_service::AuthService;
pub use course_service::CourseService;
pub use profile_service::ProfileService;
pub use progress_service::ProgressService;
pub use validation_service::{RunOutcome, ValidationService};

/// One handle to every service, wired to the same gateway and credential
/// store. The gateway and credentials are explicit constructor arguments so
/// a caller (or a test) fully controls what a service can see.
pub struct AppState {
    pub courses: CourseService,
    pub validation: ValidationService,
    pub progress: ProgressService,
    pub profile: ProfileService,
    pub achievements: AchievementService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            courses: CourseService::new(gateway.clone(), credentials.clone()),
            validation: ValidationService::new(gateway.clone(), credentials.clone()),
            progress: ProgressService::new(gateway.clone(), credentials.clone()),
            profile: ProfileService::new(gateway.clone(), credentials.clone()),
            achievements: AchievementService::new(gateway.clone(), credentials.clone()),
            auth: AuthService::new(gateway, credentials),
        }
    }
}

/// One gateway invocation mapped into this crate's error type.
pub(crate) async fn invoke_raw(
    gateway: &dyn CommandGateway,
    operation: &'static str,
    args: Value,
) -> Result<Value> {
    gateway
        .invoke(operation, args)
        .await
        .map_err(|source| Error::Gateway { operation, source })
}

/// One gateway invocation, decoded into `T`.
pub(crate) async fn invoke_decoded<T: DeserializeOwned>(
    gateway: &dyn CommandGateway,
    operation: &'static str,
    args: Value,
) -> Result<T> {
    let raw = invoke_raw(gateway, operation, args).await?;
    serde_json::from_value(raw).map_err(|source| Error::Decode { operation, source })
}
