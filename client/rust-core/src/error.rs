use thiserror::Error;

/// Errors surfaced by the client core.
///
/// "Entity not found" is not an error anywhere in this crate: lookups return
/// `Ok(None)` (or `None` on the infallible read paths). Read paths that fall
/// back to local data absorb gateway failures entirely and never produce one
/// of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not authenticated: access token missing")]
    MissingCredential,

    #[error("remote operation `{operation}` failed: {source}")]
    Gateway {
        operation: &'static str,
        #[source]
        source: GatewayError,
    },

    #[error("failed to decode `{operation}` response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),
}

/// Failure of a single gateway invocation. The gateway performs exactly one
/// attempt per call; retry policy, if any, belongs to the backend.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned {status}: {message}")]
    Remote { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
